//! physio-render
//!
//! Controlled rendering of assessment forms. A [`renderer::FormRenderer`]
//! shows the caller's record merged over the form defaults and reports every
//! edit as a complete replacement record; it never stores the result.

pub mod error;
pub mod html;
pub mod renderer;
pub mod view;
