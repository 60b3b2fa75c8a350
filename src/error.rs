use crate::{curves::CurveError, render::RenderError};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Error in the `curves` module")]
    Curves(#[from] CurveError),
    #[error("Error in the `render` module")]
    Render(#[from] RenderError),
}
