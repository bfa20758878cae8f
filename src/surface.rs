// Sizes the canvas against its host container. The backing buffer gets the
// device-pixel-ratio-scaled dimensions while the inline CSS size stays at
// the container's size, so the canvas renders at native sharpness without
// growing in layout.

use std::error::Error;
use std::fmt;
use web_sys::HtmlCanvasElement;

/// Container content size in CSS pixels, as used for particle seeding.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Debug)]
pub enum SurfaceError {
    /// The canvas is not attached to a parent element yet; sizing is retried
    /// on the next lifecycle event.
    ContainerUnavailable,
    /// The canvas or its 2d context is gone, e.g. torn down mid-flight.
    ContextUnavailable,
    Style(String),
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceError::ContainerUnavailable => {
                write!(f, "canvas has no host container to measure")
            }
            SurfaceError::ContextUnavailable => {
                write!(f, "canvas 2d context is unavailable")
            }
            SurfaceError::Style(detail) => write!(f, "failed to style canvas: {}", detail),
        }
    }
}

impl Error for SurfaceError {}

// Measure the parent container and apply both sizes to the canvas: backing
// buffer = CSS size x device pixel ratio, inline style = unscaled CSS size.
// Returns the unscaled size for seeding.
pub fn fit_to_container(canvas: &HtmlCanvasElement) -> Result<Viewport, SurfaceError> {
    let window = web_sys::window().ok_or(SurfaceError::ContainerUnavailable)?;
    let parent = canvas
        .parent_element()
        .ok_or(SurfaceError::ContainerUnavailable)?;

    let rect = parent.get_bounding_client_rect();
    let width = rect.width();
    let height = rect.height();
    let ratio = match window.device_pixel_ratio() {
        r if r > 0.0 => r,
        _ => 1.0,
    };

    canvas.set_width((width * ratio) as u32);
    canvas.set_height((height * ratio) as u32);

    let style = canvas.style();
    style
        .set_property("width", &format!("{}px", width))
        .map_err(|err| SurfaceError::Style(format!("{:?}", err)))?;
    style
        .set_property("height", &format!("{}px", height))
        .map_err(|err| SurfaceError::Style(format!("{:?}", err)))?;

    Ok(Viewport { width, height })
}
