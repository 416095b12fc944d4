use rodio::{Decoder, Sink, Source};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Sfx {
    Munch,
    GameOver,
}

impl Sfx {
    pub fn file_name(self) -> &'static str {
        match self {
            Sfx::Munch => "munch.wav",
            Sfx::GameOver => "game_over.wav",
        }
    }
}

pub struct AudioManager {
    _stream: Option<rodio::OutputStream>,
    stream_handle: Option<rodio::OutputStreamHandle>,
    sfx_dir: PathBuf,
}

impl AudioManager {
    pub fn new(sfx_dir: impl Into<PathBuf>) -> Self {
        let stream = rodio::OutputStream::try_default().ok();
        if stream.is_none() {
            log::warn!("no audio output device, sound disabled");
        }
        let handle = stream.as_ref().map(|s| s.1.clone());
        Self {
            _stream: stream.map(|s| s.0),
            stream_handle: handle,
            sfx_dir: sfx_dir.into(),
        }
    }

    pub fn sfx_path(&self, sfx: Sfx) -> PathBuf {
        self.sfx_dir.join(sfx.file_name())
    }

    pub fn play(&self, sfx: Sfx) {
        let Some(handle) = &self.stream_handle else {
            return;
        };
        // Silencioso si falta el archivo
        if let Err(err) = play_file(handle, &self.sfx_path(sfx)) {
            log::debug!("skipping {:?}: {:#}", sfx, err);
        }
    }
}

fn play_file(handle: &rodio::OutputStreamHandle, path: &Path) -> anyhow::Result<()> {
    let file = File::open(path)?;
    let dec = Decoder::new(BufReader::new(file))?;
    let sink = Sink::try_new(handle)?;
    sink.append(dec.amplify(0.8));
    sink.detach();
    Ok(())
}
