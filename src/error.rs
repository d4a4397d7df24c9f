//! Error types. `VgaError::GraphicsSurfaceCreate` is non-fatal and caught by
//! `mode_switch::switch_mode`; `TextSurfaceAlloc` is fatal and propagated
//! out of `refresh`.

use simple_error::SimpleError;

quick_error! {
    #[derive(Debug)]
    pub enum VgaError {
        GraphicsSurfaceCreate(reason: String) {
            description("failed to create graphics surface")
            display("failed to create graphics surface: {}", reason)
        }
        TextSurfaceAlloc {
            description("failed to allocate text surface")
            display("failed to allocate text surface")
        }
    }
}

impl From<SimpleError> for VgaError {
    fn from(err: SimpleError) -> VgaError {
        VgaError::GraphicsSurfaceCreate(err.to_string())
    }
}
