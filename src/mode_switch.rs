//! Mode switching: tears down the prior host surface and acquires a new one
//! sized to the derived resolution.

use error::VgaError;
use host::{GraphicsSurface, HostDisplay, TextSurface};
use mode;
use regs::RegFile;

/// Exactly one of these is held at a time, or `None` during the brief window
/// of a switch. There is simply no `Graphics` variant to release unless one
/// was actually constructed, so releasing without a prior acquisition can't
/// happen.
pub enum ActiveSurface {
    None,
    Text(Box<dyn TextSurface>),
    Graphics(Box<dyn GraphicsSurface>),
}

impl ActiveSurface {
    pub fn is_text(&self) -> bool {
        match *self {
            ActiveSurface::Text(_) => true,
            _ => false,
        }
    }
}

/// Runs the five `ModeChanged` steps. On success, `surface` holds the newly
/// created one and the caller is responsible for requesting a full-screen
/// dirty update (step 5) since that touches `DisplayState` flags this
/// function doesn't own.
///
/// Graphics surface creation failure leaves `surface` untouched and returns
/// `Ok(())`; the prior surface and geometry remain active. Text surface
/// allocation failure is fatal and returned as `Err`.
pub fn switch_mode(
    surface: &mut ActiveSurface,
    host: &mut dyn HostDisplay,
    regs: &RegFile,
) -> Result<(), VgaError> {
    let (width, height) = mode::resolution(&regs.crtc, &regs.gc, &regs.seq, &regs.ac);
    let graphics = !mode::is_text_mode(&regs.gc);

    // Acquire the replacement before releasing the prior surface: a
    // creation failure must leave the caller on the old surface and old
    // geometry, so the old surface is only dropped once we know it has
    // something to be replaced with.
    if graphics {
        match host.create_graphics_surface(width, height) {
            Ok(mut gfx) => {
                {
                    let fb = gfx.framebuffer();
                    let mut buf = fb.lock().unwrap();
                    for b in buf.iter_mut() {
                        *b = 0;
                    }
                }
                gfx.invalidate_region(::host::Rect {
                    left: 0,
                    top: 0,
                    right: width as i32,
                    bottom: height as i32,
                });
                *surface = ActiveSurface::Graphics(gfx);
                Ok(())
            }
            Err(_) => Ok(()),
        }
    } else {
        match host.create_text_surface(width, height) {
            Ok(mut text) => {
                text.resize(width, height);
                *surface = ActiveSurface::Text(text);
                Ok(())
            }
            Err(_) => Err(VgaError::TextSurfaceAlloc),
        }
    }
}

#[cfg(test)]
#[path = "./mode_switch_test.rs"]
mod mode_switch_test;
