use {
    anyhow::{Context, bail},
    base::log::LevelFilter,
    corpus::{DEFAULT_IMAGE_EXTENSION, LabelPolicy, LoaderConfig},
    landmark::{HAND_LANDMARK_COUNT, SidecarExtractor},
    std::path::PathBuf,
    subspace::ModelConfig,
};

/// Run settings taken from `GESTURE_*` environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub rank: Option<usize>,
    pub log_dir: Option<PathBuf>,
    pub log_level: LevelFilter,
    pub extract_dir: Option<PathBuf>,
    pub image_extension: String,
    pub label_policy: LabelPolicy,
    pub expected_landmarks: Option<usize>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            rank: None,
            log_dir: None,
            log_level: base::default_level(),
            extract_dir: None,
            image_extension: DEFAULT_IMAGE_EXTENSION.to_string(),
            label_policy: LabelPolicy::Alphabetic,
            expected_landmarks: Some(HAND_LANDMARK_COUNT),
        }
    }
}

impl Settings {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`, falling back to defaults for unset
    /// or empty variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut settings = Settings::default();

        if let Some(rank) = get("GESTURE_RANK") {
            let rank: usize = rank
                .trim()
                .parse()
                .with_context(|| format!("GESTURE_RANK: invalid rank {rank:?}"))?;
            settings.rank = Some(rank);
        }
        settings.log_dir = get("GESTURE_LOG_DIR").map(PathBuf::from);
        if let Some(level) = get("GESTURE_LOG_LEVEL") {
            settings.log_level = parse_level(&level)?;
        }
        settings.extract_dir = get("GESTURE_EXTRACT_DIR").map(PathBuf::from);
        if let Some(extension) = get("GESTURE_IMAGE_EXT") {
            settings.image_extension = extension.trim().trim_start_matches('.').to_string();
        }
        if let Some(labels) = get("GESTURE_LABELS") {
            settings.label_policy = match labels.trim().to_ascii_lowercase().as_str() {
                "alphabetic" => LabelPolicy::Alphabetic,
                "stem" => LabelPolicy::FileStem,
                other => bail!("GESTURE_LABELS: expected alphabetic or stem, got {other:?}"),
            };
        }
        if let Some(count) = get("GESTURE_LANDMARKS") {
            let count: usize = count
                .trim()
                .parse()
                .with_context(|| format!("GESTURE_LANDMARKS: invalid count {count:?}"))?;
            settings.expected_landmarks = (count > 0).then_some(count);
        }
        Ok(settings)
    }

    pub fn model_config(&self) -> ModelConfig {
        ModelConfig::default().with_rank(self.rank)
    }

    pub fn loader_config(&self) -> LoaderConfig {
        let config = LoaderConfig::default()
            .with_image_extension(self.image_extension.clone())
            .with_label_policy(self.label_policy);
        match &self.extract_dir {
            Some(dir) => config.with_extract_dir(dir.clone()),
            None => config,
        }
    }

    pub fn extractor(&self) -> SidecarExtractor {
        SidecarExtractor::default().with_expected_landmarks(self.expected_landmarks)
    }

    /// Installs the file logger when a log directory is set, stderr otherwise.
    pub fn init_logging(&self) -> anyhow::Result<()> {
        match &self.log_dir {
            Some(dir) => base::init_file_logger(dir, self.log_level),
            None => {
                base::init_stderr_logger(self.log_level);
                Ok(())
            }
        }
    }
}

fn parse_level(level: &str) -> anyhow::Result<LevelFilter> {
    Ok(match level.trim().to_ascii_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        other => bail!("GESTURE_LOG_LEVEL: unknown level {other:?}"),
    })
}
