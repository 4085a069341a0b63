use pagefb::{Config, FrameBuffer, ScrollPlot};

#[test]
fn full_window_of_scrolled_samples_equals_direct_plot() {
    let samples: Vec<u8> = (0..128).map(|i| (i % 50) as u8 * 5).collect();

    let mut scrolled = FrameBuffer::new(Config::default()).unwrap();
    let mut ring = ScrollPlot::new(scrolled.width());
    for &v in &samples {
        ring.scroll(&mut scrolled, v, 0, 250);
    }

    let mut direct = FrameBuffer::new(Config::default()).unwrap();
    direct.plot_scaled(&samples, 0, 250);

    assert_eq!(scrolled.raw_buffer(), direct.raw_buffer());
}

#[test]
fn scrolling_past_the_window_drops_the_oldest_samples() {
    let mut fb = FrameBuffer::new(Config::new(8, 8)).unwrap();
    let mut ring = ScrollPlot::new(8);

    // eight high samples, then eight low ones: the high window must be gone
    for _ in 0..8 {
        ring.scroll(&mut fb, 100, 0, 100);
    }
    for _ in 0..8 {
        ring.scroll(&mut fb, 0, 0, 100);
    }

    let mut expected = FrameBuffer::new(Config::new(8, 8)).unwrap();
    expected.plot_scaled(&[0; 8], 0, 100);
    assert_eq!(fb.raw_buffer(), expected.raw_buffer());
}

#[test]
fn each_scroll_redraws_exactly_one_column_per_sample() {
    let mut fb = FrameBuffer::new(Config::new(16, 16)).unwrap();
    let mut ring = ScrollPlot::new(16);
    ring.scroll(&mut fb, 80, 0, 160);

    let lit: u32 = fb.raw_buffer().iter().map(|b| b.count_ones()).sum();
    assert_eq!(lit, 16);
}

#[test]
fn plotter_width_smaller_than_buffer_leaves_right_side_clear() {
    let mut fb = FrameBuffer::new(Config::new(16, 8)).unwrap();
    let mut ring = ScrollPlot::new(8);
    ring.scroll(&mut fb, 255, 0, 255);

    for x in 8..16 {
        for y in 0..8 {
            assert!(!fb.get_pixel(x, y));
        }
    }
}
