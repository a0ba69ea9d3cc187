// SPDX-License-Identifier: GPL-3.0-only

//! Small shared helpers for the app module

/// Format elapsed seconds as a zero-padded `MM:SS` timer string.
///
/// Minutes keep growing past 59 (a 100-minute take reads `100:05`).
pub fn format_timer(elapsed_secs: u64) -> String {
    let minutes = elapsed_secs / 60;
    let seconds = elapsed_secs % 60;
    format!("{:02}:{:02}", minutes, seconds)
}

/// Mirror tightly-packed RGBA pixels horizontally.
///
/// Used for the front camera preview only; captured frames stay unmirrored.
pub fn mirror_rgba(data: &[u8], width: u32, height: u32) -> Vec<u8> {
    let width = width as usize;
    let height = height as usize;
    let row_len = width * 4;

    let mut mirrored = Vec::with_capacity(data.len());
    for row in 0..height {
        let row_bytes = &data[row * row_len..(row + 1) * row_len];
        for pixel in row_bytes.chunks_exact(4).rev() {
            mirrored.extend_from_slice(pixel);
        }
    }
    mirrored
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_starts_at_zero() {
        assert_eq!(format_timer(0), "00:00");
    }

    #[test]
    fn timer_is_zero_padded() {
        assert_eq!(format_timer(5), "00:05");
        assert_eq!(format_timer(59), "00:59");
        assert_eq!(format_timer(60), "01:00");
    }

    #[test]
    fn sixty_five_seconds_reads_01_05() {
        assert_eq!(format_timer(65), "01:05");
    }

    #[test]
    fn timer_minutes_grow_past_an_hour() {
        assert_eq!(format_timer(3599), "59:59");
        assert_eq!(format_timer(6005), "100:05");
    }

    #[test]
    fn mirror_reverses_each_row() {
        // 2x2 image, one byte pattern per pixel
        let data = [
            1, 1, 1, 1, 2, 2, 2, 2, // row 0: A B
            3, 3, 3, 3, 4, 4, 4, 4, // row 1: C D
        ];
        let mirrored = mirror_rgba(&data, 2, 2);
        assert_eq!(
            mirrored,
            vec![
                2, 2, 2, 2, 1, 1, 1, 1, // row 0: B A
                4, 4, 4, 4, 3, 3, 3, 3, // row 1: D C
            ]
        );
    }

    #[test]
    fn double_mirror_is_identity() {
        let data: Vec<u8> = (0..3 * 2 * 4).map(|i| i as u8).collect();
        let twice = mirror_rgba(&mirror_rgba(&data, 3, 2), 3, 2);
        assert_eq!(twice, data);
    }
}
