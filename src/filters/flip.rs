//! Mirroring operations.
//!
//! Both flips are exact bijections on pixel positions and copy channel
//! values verbatim:
//! - Horizontal: (row, col) -> (row, W - 1 - col)
//! - Vertical: (row, col) -> (H - 1 - row, col)
//!
//! Grids with zero rows or columns are returned unchanged.

use ndarray::s;

use crate::grid::PixelGrid;

/// Mirror the grid left-to-right.
pub fn flip_horizontal(input: &PixelGrid) -> PixelGrid {
    let mirrored = input.view().slice(s![.., ..;-1, ..]).to_owned();
    wrap(mirrored)
}

/// Mirror the grid top-to-bottom.
pub fn flip_vertical(input: &PixelGrid) -> PixelGrid {
    let mirrored = input.view().slice(s![..;-1, .., ..]).to_owned();
    wrap(mirrored)
}

fn wrap(data: ndarray::Array3<u8>) -> PixelGrid {
    PixelGrid::from_array(data).expect("slicing keeps all 4 channels")
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: [u8; 4] = [255, 0, 0, 255];
    const B: [u8; 4] = [0, 255, 0, 255];
    const C: [u8; 4] = [0, 0, 255, 128];

    #[test]
    fn test_flip_horizontal_row() {
        let grid = PixelGrid::from_rows(&[vec![A, B, C]]).unwrap();

        let result = flip_horizontal(&grid);

        assert_eq!(result.pixel(0, 0), Some(C));
        assert_eq!(result.pixel(0, 1), Some(B));
        assert_eq!(result.pixel(0, 2), Some(A));
    }

    #[test]
    fn test_flip_vertical_column() {
        let grid = PixelGrid::from_rows(&[vec![A], vec![B], vec![C]]).unwrap();

        let result = flip_vertical(&grid);

        assert_eq!(result.pixel(0, 0), Some(C));
        assert_eq!(result.pixel(2, 0), Some(A));
    }

    #[test]
    fn test_flip_keeps_dimensions() {
        let grid = PixelGrid::filled(3, 5, A);
        assert_eq!(flip_horizontal(&grid).dim(), (3, 5));
        assert_eq!(flip_vertical(&grid).dim(), (3, 5));
    }

    #[test]
    fn test_flip_empty_is_noop() {
        let empty = PixelGrid::new(0, 0);
        assert_eq!(flip_horizontal(&empty), empty);
        assert_eq!(flip_vertical(&PixelGrid::new(4, 0)), PixelGrid::new(4, 0));
    }

    #[test]
    fn test_flipped_grid_converts_to_image() {
        let grid = PixelGrid::from_rows(&[vec![A, B], vec![C, A]]).unwrap();

        let image = flip_vertical(&flip_horizontal(&grid)).to_rgba_image();

        assert_eq!(image.get_pixel(0, 0).0, A);
        assert_eq!(image.get_pixel(1, 0).0, C);
        assert_eq!(image.get_pixel(1, 1).0, A);
    }

    #[test]
    fn test_flip_horizontal_output_is_standard_layout() {
        let grid = PixelGrid::from_rows(&[vec![A, B]]).unwrap();
        let raw = flip_horizontal(&grid).into_raw();
        assert_eq!(&raw[..4], &B);
        assert_eq!(&raw[4..], &A);
    }
}
