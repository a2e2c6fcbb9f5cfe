mod tests {
    use myrtio_neopixel::color::{Hsb, Rgb, hsb_to_rgb, rgb_from_u32, rgb_to_u32};

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    #[test]
    fn test_hsb_achromatic() {
        assert_eq!(hsb_to_rgb(0.0, 0.0, 1.0), WHITE);
        assert_eq!(hsb_to_rgb(200.0, 0.0, 0.0), BLACK);
        // 0.5 * 255 = 127.5, truncated
        assert_eq!(hsb_to_rgb(90.0, 0.0, 0.5), Rgb::new(127, 127, 127));
    }

    #[test]
    fn test_hsb_primaries() {
        assert_eq!(hsb_to_rgb(0.0, 1.0, 1.0), RED);
        assert_eq!(hsb_to_rgb(120.0, 1.0, 1.0), GREEN);
        assert_eq!(hsb_to_rgb(240.0, 1.0, 1.0), BLUE);
    }

    #[test]
    fn test_hsb_secondaries() {
        assert_eq!(hsb_to_rgb(60.0, 1.0, 1.0), Rgb::new(255, 255, 0));
        assert_eq!(hsb_to_rgb(180.0, 1.0, 1.0), Rgb::new(0, 255, 255));
        assert_eq!(hsb_to_rgb(300.0, 1.0, 1.0), Rgb::new(255, 0, 255));
    }

    #[test]
    fn test_hsb_mid_sector() {
        // slice 0, frac 0.5: c = 0.5
        assert_eq!(hsb_to_rgb(30.0, 1.0, 1.0), Rgb::new(255, 127, 0));
        // slice 5, frac 0.5: b = 0.5
        assert_eq!(hsb_to_rgb(330.0, 1.0, 1.0), Rgb::new(255, 0, 127));
    }

    #[test]
    fn test_hsb_hue_wraps() {
        assert_eq!(hsb_to_rgb(360.0, 1.0, 1.0), hsb_to_rgb(0.0, 1.0, 1.0));
        assert_eq!(hsb_to_rgb(480.0, 1.0, 1.0), GREEN);
        assert_eq!(hsb_to_rgb(-120.0, 1.0, 1.0), BLUE);
        assert_eq!(hsb_to_rgb(-0.000_01, 1.0, 1.0), RED);
    }

    #[test]
    fn test_hsb_clamps_fractions() {
        assert_eq!(hsb_to_rgb(0.0, 2.0, 5.0), RED);
        assert_eq!(hsb_to_rgb(0.0, 1.0, -1.0), BLACK);
        assert_eq!(hsb_to_rgb(0.0, -1.0, 1.0), WHITE);
        assert_eq!(hsb_to_rgb(f32::NAN, 1.0, 1.0), RED);
        assert_eq!(hsb_to_rgb(0.0, f32::NAN, f32::NAN), BLACK);
    }

    #[test]
    fn test_hsb_struct_conversion() {
        let rgb: Rgb = Hsb::new(240.0, 1.0, 1.0).into();
        assert_eq!(rgb, BLUE);
    }

    #[test]
    fn test_packed_colors() {
        assert_eq!(rgb_from_u32(0xFF_0000), RED);
        assert_eq!(rgb_from_u32(0xAB_12_34_56), Rgb::new(0x12, 0x34, 0x56));
        assert_eq!(rgb_to_u32(Rgb::new(0x12, 0x34, 0x56)), 0x12_3456);
    }
}
