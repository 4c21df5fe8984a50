//! Log file download links
//!
//! The host UI serves each log stream under `log/<stream>/` and exposes a
//! client-side `downloadFile` handler. These links only build markup; no log
//! file is touched here.

/// Log streams that can be downloaded from the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogStream {
    Motion,
    MotionEye,
    Messages,
}

impl LogStream {
    /// Path segment of the download endpoint
    pub fn stream_name(&self) -> &'static str {
        match self {
            LogStream::Motion => "motion",
            LogStream::MotionEye => "motioneye",
            LogStream::Messages => "messages",
        }
    }

    /// Text shown for the link
    pub fn file_label(&self) -> &'static str {
        match self {
            LogStream::Motion => "motion.log",
            LogStream::MotionEye => "motioneye.log",
            LogStream::Messages => "messages",
        }
    }
}

/// HTML anchor triggering the download of `stream`
pub fn log_link(stream: LogStream) -> String {
    format!(
        "<a href=\"javascript:downloadFile('log/{}/');\">{}</a>",
        stream.stream_name(),
        stream.file_label()
    )
}

pub fn motion_log_link() -> String {
    log_link(LogStream::Motion)
}

pub fn motioneye_log_link() -> String {
    log_link(LogStream::MotionEye)
}

pub fn messages_log_link() -> String {
    log_link(LogStream::Messages)
}
