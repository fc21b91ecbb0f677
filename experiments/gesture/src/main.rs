use base::log;
use gesture::{Command, Settings, USAGE, answer_line, build_model, classify_photos};
use std::sync::Arc;
use subspace::{Classifier, SubspaceModel};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match Command::parse(&args) {
        Ok(command) => command,
        Err(err) => {
            eprintln!("{err}");
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
    };

    let settings = Settings::from_env()?;
    settings.init_logging()?;

    let (model, photos) = match command {
        Command::Build { corpus, model } => {
            build_model(&settings, &corpus)?.save(&model)?;
            log::info!("model saved to {}", model.display());
            return Ok(());
        }
        Command::Run { corpus, photos } => (build_model(&settings, &corpus)?, photos),
        Command::Classify { model, photos } => (SubspaceModel::load(&model)?, photos),
    };

    let classifier = Classifier::from_shared(Arc::new(model));
    let with_path = photos.len() > 1;
    for (photo, classification) in
        classify_photos(classifier, settings.extractor(), photos).await?
    {
        println!("{}", answer_line(&photo, &classification, with_path));
    }
    Ok(())
}
