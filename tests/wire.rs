mod tests {
    use myrtio_neopixel::Rgb;
    use myrtio_neopixel::wire::{decode_pixel, encode_pixel, reverse_bit_order};

    #[test]
    fn test_reverse_fixed_points() {
        assert_eq!(reverse_bit_order(0x00), 0x00);
        assert_eq!(reverse_bit_order(0xFF), 0xFF);
        assert_eq!(reverse_bit_order(0b1000_0000), 0b0000_0001);
        assert_eq!(reverse_bit_order(0b1100_1010), 0b0101_0011);
    }

    #[test]
    fn test_reverse_is_involution() {
        for value in 0..=u8::MAX {
            assert_eq!(reverse_bit_order(reverse_bit_order(value)), value);
        }
    }

    #[test]
    fn test_encode_pixel_is_grb() {
        let color = Rgb::new(0x01, 0x02, 0x04);
        assert_eq!(encode_pixel(color), [0x40, 0x80, 0x20]);
        assert_eq!(decode_pixel(encode_pixel(color)), color);
    }
}
