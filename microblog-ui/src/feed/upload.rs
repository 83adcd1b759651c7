//! Image attachment validation, preview bookkeeping and the post character
//! counter.

use crate::error::FeedError;

/// The parts of a selected `File` that validation looks at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub mime: String,
    pub size: u64,
}

pub fn validate_image(file: &SelectedFile, max_bytes: u64) -> Result<(), FeedError> {
    if !file.mime.starts_with("image/") {
        return Err(FeedError::InvalidFileType(file.mime.clone()));
    }
    if file.size > max_bytes {
        return Err(FeedError::FileTooLarge {
            size: file.size,
            max: max_bytes,
        });
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PreviewState {
    #[default]
    Hidden,
    /// Waiting on the file read identified by `ticket`
    Loading { ticket: u64 },
    Visible { data_url: String },
}

/// What the DOM side must do after a selection change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionCommand {
    HidePreview,
    /// Clear the input, hide the preview and tell the user why
    Reject(FeedError),
    /// Read the file; hand the result back with this ticket
    Read { ticket: u64 },
}

/// Tracks the single selected image.
///
/// Every selection, including clearing the input, bumps the ticket, so a slow read for a file
/// that has since been replaced never reaches the preview.
#[derive(Debug, Clone, Default)]
pub struct ImageUploadState {
    preview: PreviewState,
    last_ticket: u64,
}

impl ImageUploadState {
    pub fn preview(&self) -> &PreviewState {
        &self.preview
    }

    pub fn select(&mut self, file: Option<&SelectedFile>, max_bytes: u64) -> SelectionCommand {
        self.last_ticket += 1;

        let Some(file) = file else {
            self.preview = PreviewState::Hidden;
            return SelectionCommand::HidePreview;
        };

        match validate_image(file, max_bytes) {
            Ok(()) => {
                self.preview = PreviewState::Loading {
                    ticket: self.last_ticket,
                };
                SelectionCommand::Read {
                    ticket: self.last_ticket,
                }
            }
            Err(e) => {
                self.preview = PreviewState::Hidden;
                SelectionCommand::Reject(e)
            }
        }
    }

    /// Returns `true` when the preview should now show `data_url`.
    pub fn finish_read(&mut self, ticket: u64, data_url: String) -> bool {
        if self.preview != (PreviewState::Loading { ticket }) {
            return false;
        }
        self.preview = PreviewState::Visible { data_url };
        true
    }

    /// Returns `true` when the failure belongs to the current selection.
    pub fn fail_read(&mut self, ticket: u64) -> bool {
        if self.preview != (PreviewState::Loading { ticket }) {
            return false;
        }
        self.preview = PreviewState::Hidden;
        true
    }
}

// ============================================================================
// Character counter
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharCountTier {
    Neutral,
    Warning,
    Danger,
}

impl CharCountTier {
    pub fn for_length(length: usize, warning_above: usize, danger_above: usize) -> Self {
        if length > danger_above {
            CharCountTier::Danger
        } else if length > warning_above {
            CharCountTier::Warning
        } else {
            CharCountTier::Neutral
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            CharCountTier::Neutral => "#6c757d",
            CharCountTier::Warning => "#fd7e14",
            CharCountTier::Danger => "#dc3545",
        }
    }
}

/// Post length as the server counts it (characters, not bytes).
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}
