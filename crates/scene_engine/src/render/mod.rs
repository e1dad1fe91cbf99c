//! Renderer seam
//!
//! Drawing is done by a collaborator; the scene only hands it the stage once
//! per frame.

use crate::stage::Stage;
use thiserror::Error;

/// Something that can draw a stage
pub trait Renderer {
    /// Draw one frame of `stage`
    fn render(&mut self, stage: &Stage) -> Result<(), RenderError>;
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn render(&mut self, stage: &Stage) -> Result<(), RenderError> {
        (**self).render(stage)
    }
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn render(&mut self, stage: &Stage) -> Result<(), RenderError> {
        (**self).render(stage)
    }
}

/// Renderer that draws nothing, for headless runs
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _stage: &Stage) -> Result<(), RenderError> {
        Ok(())
    }
}

/// Rendering errors
#[derive(Error, Debug)]
pub enum RenderError {
    /// The output surface went away (window closed, context lost)
    #[error("Render surface lost")]
    SurfaceLost,

    /// A node referenced a texture the renderer does not know
    #[error("Missing texture: {0}")]
    MissingTexture(String),

    /// Backend-specific failure
    #[error("Render backend error: {0}")]
    Backend(String),
}
