use crate::{
    foundation::error::{BoothError, BoothResult},
    strip::model::{FrameConfig, LayoutDescriptor, StickerLayer},
};

/// The booth's navigation steps.
///
/// The UI owns presentation; the core models the step as an explicit value
/// with pure transitions so session behavior is testable without a UI.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    /// Landing screen.
    #[default]
    Welcome,
    /// Layout selection.
    Layout,
    /// Photo capture/upload.
    Capture,
    /// Strip preview and customization.
    Preview,
}

impl Step {
    /// The step that follows `self` in the forward flow.
    pub fn next(self) -> Step {
        match self {
            Step::Welcome => Step::Layout,
            Step::Layout => Step::Capture,
            Step::Capture => Step::Preview,
            Step::Preview => Step::Preview,
        }
    }
}

/// Per-session customization state carried alongside the step.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Session {
    /// Current navigation step.
    pub step: Step,
    /// Selected layout, set when leaving [`Step::Layout`].
    pub layout: Option<LayoutDescriptor>,
    /// Frame styling for the preview.
    pub frame: FrameConfig,
    /// Placed stickers.
    pub stickers: StickerLayer,
}

impl Session {
    /// Fresh session at the welcome step.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance to the next step, recording the chosen layout when leaving
    /// layout selection.
    pub fn advance(&mut self, layout: Option<LayoutDescriptor>) {
        if self.step == Step::Layout {
            self.layout = layout.or(self.layout.take());
        }
        self.step = self.step.next();
    }

    /// Return to capture for a retake; customization is kept.
    pub fn retake(&mut self) {
        if self.step == Step::Preview {
            self.step = Step::Capture;
        }
    }

    /// Clear stickers and restore the default frame, keeping layout/photos.
    pub fn reset_customization(&mut self) {
        self.stickers.clear();
        self.frame = FrameConfig::default();
    }

    /// Serialize the session for handoff to the embedding shell.
    pub fn to_json(&self) -> BoothResult<String> {
        serde_json::to_string(self)
            .map_err(|e| BoothError::validation(format!("serialize session: {e}")))
    }

    /// Restore a session from its serialized form, re-checking model
    /// invariants the wire format cannot express.
    pub fn from_json(json: &str) -> BoothResult<Self> {
        let session: Self = serde_json::from_str(json)
            .map_err(|e| BoothError::validation(format!("deserialize session: {e}")))?;
        if let Some(layout) = &session.layout {
            layout.validate()?;
        }
        for sticker in session.stickers.as_slice() {
            sticker.validate()?;
        }
        Ok(session)
    }

    /// Abandon the session entirely and return to the welcome step.
    ///
    /// Outstanding photo decodes started before the reset are simply
    /// discarded by the caller; no render may use them afterwards.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/strip/session.rs"]
mod tests;
