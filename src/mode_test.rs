use mode::*;
use regs::consts::*;
use regs::{AttributeController, Crtc, GraphicsController, Sequencer};

#[test]
fn aperture_select_indexes_the_fixed_table() {
    let mut gc = GraphicsController::default();
    gc.set_index(GC_MISC_REG);
    gc.write_current(0b0000_1100); // aperture_select = 3 -> B8000-BFFFF
    assert_eq!(aperture(&gc), APERTURES[3]);
}

#[test]
fn text_mode_is_the_default() {
    let gc = GraphicsController::default();
    assert!(is_text_mode(&gc));
    let mut graphics_gc = GraphicsController::default();
    graphics_gc.set_index(GC_MISC_REG);
    graphics_gc.write_current(GC_MISC_NOALPHA);
    assert!(!is_text_mode(&graphics_gc));
}

/// Scenario S2: 320x200x256 via the documented register sequence.
#[test]
fn scenario_s2_register_sequence_yields_320x200() {
    let mut gc = GraphicsController::default();
    gc.set_index(GC_MISC_REG);
    gc.write_current(GC_MISC_NOALPHA);

    let mut seq = Sequencer::default();
    seq.set_index(SEQ_CLOCK_REG);
    seq.write_current(SEQ_CLOCK_98DM); // 8-dot

    let mut ac = AttributeController::default();
    ac.write_index_port(AC_CONTROL_REG); // sets index (latch starts false)
    ac.write_index_port(AC_CONTROL_8BIT); // writes data at that index

    let mut crtc = Crtc::default();
    crtc.set_index(CRTC_END_HORZ_DISP_REG);
    crtc.write_current(79);
    crtc.set_index(CRTC_VERT_DISP_END_REG);
    crtc.write_current(199);
    crtc.set_index(CRTC_MAX_SCAN_LINE_REG);
    crtc.write_current(0);
    crtc.set_index(CRTC_OVERFLOW_REG);
    crtc.write_current(0);

    assert!(!is_text_mode(&gc));
    assert_eq!(resolution(&crtc, &gc, &seq, &ac), (320, 200));
}

#[test]
fn text_mode_resolution_is_not_multiplied_by_dot_clock() {
    let gc = GraphicsController::default(); // NOALPHA unset -> text mode
    let seq = Sequencer::default();
    let ac = AttributeController::default();
    let mut crtc = Crtc::default();
    crtc.set_index(CRTC_END_HORZ_DISP_REG);
    crtc.write_current(79);
    crtc.set_index(CRTC_VERT_DISP_END_REG);
    crtc.write_current(24);

    assert_eq!(resolution(&crtc, &gc, &seq, &ac), (80, 25));
}

#[test]
fn vertical_overflow_bits_extend_y_past_256() {
    let gc = GraphicsController::default();
    let seq = Sequencer::default();
    let ac = AttributeController::default();
    let mut crtc = Crtc::default();
    crtc.set_index(CRTC_VERT_DISP_END_REG);
    crtc.write_current(0x00);
    crtc.set_index(CRTC_OVERFLOW_REG);
    crtc.write_current(CRTC_OVERFLOW_VDE8); // sets bit 8 of Y

    let (_, y) = resolution(&crtc, &gc, &seq, &ac);
    assert_eq!(y, 256 + 1);
}
