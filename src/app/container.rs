use std::sync::Arc;

use crate::adapters::{FfmpegMediaAdapter, FfprobeAdapter, Settings};
use crate::app::trim_interactor::{TrimInteractor, TrimOptions};
use crate::ports::MediaPort;

pub trait AppContainer {
    fn trim_interactor(&self) -> Arc<TrimInteractor>;
}

pub struct DefaultAppContainer {
    trim_interactor: Arc<TrimInteractor>,
}

impl DefaultAppContainer {
    pub fn new(settings: &Settings, options: TrimOptions) -> Self {
        let probe = FfprobeAdapter::new(settings.ffprobe_path.clone());
        let media_port = Arc::new(FfmpegMediaAdapter::new(
            settings.ffmpeg_path.clone(),
            probe,
            settings.threads,
        ));

        let trim_interactor = Arc::new(TrimInteractor::new(
            media_port as Arc<dyn MediaPort>,
            options,
        ));

        Self { trim_interactor }
    }
}

impl AppContainer for DefaultAppContainer {
    fn trim_interactor(&self) -> Arc<TrimInteractor> {
        Arc::clone(&self.trim_interactor)
    }
}
