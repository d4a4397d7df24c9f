use std::sync::{Arc, Mutex};

use vga_core::{CellValue, GraphicsSurface, HostDisplay, Rect, TextSurface, VgaError};

pub struct TestText {
    pub dims: (u32, u32),
    pub cursor: (bool, u32, u32, u32),
    pub blit_count: u32,
    preset_snapshot: Vec<CellValue>,
}

impl TextSurface for TestText {
    fn resize(&mut self, cols: u32, rows: u32) {
        self.dims = (cols, rows);
    }
    fn dims(&self) -> (u32, u32) {
        self.dims
    }
    fn blit(&mut self, _rect: Rect, _cells: &[CellValue]) {
        self.blit_count += 1;
    }
    fn set_cursor(&mut self, visible: bool, size_percent: u32, col: u32, row: u32) {
        self.cursor = (visible, size_percent, col, row);
    }
    fn snapshot(&self) -> Vec<CellValue> {
        self.preset_snapshot.clone()
    }
}

pub struct TestGraphics {
    pub fb: Arc<Mutex<Vec<u8>>>,
    pub dims: (u32, u32),
}

impl GraphicsSurface for TestGraphics {
    fn framebuffer(&self) -> Arc<Mutex<Vec<u8>>> {
        self.fb.clone()
    }
    fn dims(&self) -> (u32, u32) {
        self.dims
    }
    fn invalidate_region(&mut self, _rect: Rect) {}
}

pub struct TestHost {
    pub fail_graphics_once: bool,
}

impl Default for TestHost {
    fn default() -> Self {
        TestHost {
            fail_graphics_once: false,
        }
    }
}

impl HostDisplay for TestHost {
    fn create_text_surface(&mut self, cols: u32, rows: u32) -> Result<Box<dyn TextSurface>, VgaError> {
        Ok(Box::new(TestText {
            dims: (cols, rows),
            cursor: (false, 0, 0, 0),
            blit_count: 0,
            preset_snapshot: vec![CellValue { ch: b'A', attr: 0x07 }; (cols * rows) as usize],
        }))
    }

    fn create_graphics_surface(&mut self, width: u32, height: u32) -> Result<Box<dyn GraphicsSurface>, VgaError> {
        if self.fail_graphics_once {
            self.fail_graphics_once = false;
            return Err(VgaError::GraphicsSurfaceCreate("out of host video memory".into()));
        }
        Ok(Box::new(TestGraphics {
            fb: Arc::new(Mutex::new(vec![0u8; (width * height) as usize])),
            dims: (width, height),
        }))
    }
}
