use {anyhow::bail, std::path::PathBuf};

pub const USAGE: &str = "\
usage:
  gesture run <corpus> <photo>...
  gesture build <corpus> <model.json>
  gesture classify <model.json> <photo>...";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Build a model from the corpus and classify the photos with it.
    Run { corpus: PathBuf, photos: Vec<PathBuf> },
    /// Build a model from the corpus and save it.
    Build { corpus: PathBuf, model: PathBuf },
    /// Classify the photos with a saved model.
    Classify { model: PathBuf, photos: Vec<PathBuf> },
}

impl Command {
    /// Parses the arguments after the program name.
    pub fn parse(args: &[String]) -> anyhow::Result<Self> {
        let Some((name, rest)) = args.split_first() else {
            bail!("missing command");
        };
        let paths: Vec<PathBuf> = rest.iter().map(PathBuf::from).collect();
        match (name.as_str(), paths.as_slice()) {
            ("run", [corpus, photos @ ..]) if !photos.is_empty() => Ok(Command::Run {
                corpus: corpus.clone(),
                photos: photos.to_vec(),
            }),
            ("build", [corpus, model]) => Ok(Command::Build {
                corpus: corpus.clone(),
                model: model.clone(),
            }),
            ("classify", [model, photos @ ..]) if !photos.is_empty() => Ok(Command::Classify {
                model: model.clone(),
                photos: photos.to_vec(),
            }),
            ("run" | "build" | "classify", _) => bail!("wrong arguments for {name}"),
            _ => bail!("unknown command {name}"),
        }
    }
}
