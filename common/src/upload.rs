use api::upload::{UploadFile, UploadOutcome};
use tracing::{error, info};

pub const UPLOAD_FALLBACK_MESSAGE: &str = "Something went wrong. Please try again later.";

// the state behind the uploader's response banner
#[derive(Clone, Debug, Default, PartialEq)]
pub enum UploadStatus {
    #[default]
    Idle,
    Pending,
    Succeeded(String),
    Failed(String),
}

impl UploadStatus {
    // a transport error never has a server message to show, so it always gets
    // the generic text
    pub fn from_result(result: anyhow::Result<UploadOutcome>) -> Self {
        match result {
            Ok(UploadOutcome::Accepted(message)) => {
                info!("upload accepted: {message}");
                UploadStatus::Succeeded(message)
            }
            Ok(UploadOutcome::Rejected(message)) => {
                error!("upload rejected: {message}");
                UploadStatus::Failed(message)
            }
            Err(err) => {
                error!("upload failed: {err}");
                UploadStatus::Failed(String::from(UPLOAD_FALLBACK_MESSAGE))
            }
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, UploadStatus::Pending)
    }

    pub fn banner_class(&self) -> Option<&'static str> {
        match self {
            UploadStatus::Succeeded(_) => Some("alert alert-success"),
            UploadStatus::Failed(_) => Some("alert alert-danger"),
            _ => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            UploadStatus::Succeeded(message) | UploadStatus::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

// FilePicker
//
// the selected file is read asynchronously when the input changes.  every pick
// bumps the generation, so a slow read of an earlier pick can never overwrite a
// later one, and submit is held back until the latest read has settled
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilePicker {
    generation: u64,
    reading: bool,
    file: Option<UploadFile>,
}

impl FilePicker {
    // forget the previous file and hand out a token for the new read
    pub fn begin_read(&mut self) -> u64 {
        self.generation += 1;
        self.reading = true;
        self.file = None;
        self.generation
    }

    // returns false when a newer pick has superseded this read
    pub fn finish_read(&mut self, token: u64, file: Option<UploadFile>) -> bool {
        if token != self.generation {
            return false;
        }

        self.reading = false;
        self.file = file;
        true
    }

    pub fn is_reading(&self) -> bool {
        self.reading
    }

    pub fn file(&self) -> Option<&UploadFile> {
        self.file.as_ref()
    }
}

pub fn can_submit(status: &UploadStatus, picker: &FilePicker) -> bool {
    !status.is_pending() && !picker.is_reading()
}
