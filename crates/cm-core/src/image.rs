use crate::Error;

#[derive(Debug, Clone, PartialEq)]
pub struct Image<T> {
    width: usize,
    height: usize,
    data: Vec<T>,
}

impl<T> Image<T> {
    pub fn from_vec(width: usize, height: usize, data: Vec<T>) -> Result<Self, Error> {
        let expected = width.checked_mul(height).ok_or(Error::SizeMismatch {
            expected: usize::MAX,
            actual: data.len(),
        })?;

        if data.len() != expected {
            return Err(Error::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Builds an image by evaluating `f(x, y)` for every pixel in row-major order.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let len = width.checked_mul(height).expect("image size overflow");
        let mut data = Vec::with_capacity(len);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }

        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)`.
    pub fn dims(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn into_raw(self) -> Vec<T> {
        self.data
    }

    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(y * self.width + x)
    }

    pub fn as_view(&self) -> ImageView<'_, T> {
        ImageView {
            width: self.width,
            height: self.height,
            stride: self.width,
            data: &self.data,
        }
    }

    pub fn as_view_mut(&mut self) -> ImageViewMut<'_, T> {
        ImageViewMut {
            width: self.width,
            height: self.height,
            stride: self.width,
            data: &mut self.data,
        }
    }

    /// Combines two equally sized images sample by sample.
    pub fn zip_map<U, V>(
        &self,
        other: &Image<U>,
        mut f: impl FnMut(&T, &U) -> V,
    ) -> Result<Image<V>, Error> {
        if self.dims() != other.dims() {
            return Err(Error::DimensionMismatch {
                expected: self.dims(),
                actual: other.dims(),
            });
        }

        Ok(Image {
            width: self.width,
            height: self.height,
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(a, b)| f(a, b))
                .collect(),
        })
    }
}

impl<T: Clone> Image<T> {
    pub fn new_fill(width: usize, height: usize, value: T) -> Self {
        let len = width.checked_mul(height).expect("image size overflow");
        Self {
            width,
            height,
            data: vec![value; len],
        }
    }

    /// Mirrors the image left to right.
    pub fn flip_horizontal(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        if self.width > 0 {
            for row in self.data.chunks_exact(self.width) {
                data.extend(row.iter().rev().cloned());
            }
        }

        Self {
            width: self.width,
            height: self.height,
            data,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ImageView<'a, T> {
    width: usize,
    height: usize,
    stride: usize,
    data: &'a [T],
}

impl<'a, T> ImageView<'a, T> {
    pub fn from_slice(
        width: usize,
        height: usize,
        stride: usize,
        data: &'a [T],
    ) -> Result<Self, Error> {
        check_layout(width, height, stride, data.len())?;

        Ok(Self {
            width,
            height,
            stride,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn row(&self, y: usize) -> &'a [T] {
        assert!(y < self.height, "row index out of bounds");
        let start = y * self.stride;
        &self.data[start..start + self.width]
    }

    pub fn get(&self, x: usize, y: usize) -> Option<&'a T> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(y * self.stride + x)
    }

    /// Returns a pixel reference without bounds checks.
    ///
    /// # Safety
    /// Caller must guarantee `x < self.width()` and `y < self.height()`.
    pub unsafe fn get_unchecked(&self, x: usize, y: usize) -> &'a T {
        // SAFETY: Caller guarantees `x < width` and `y < height`. With view
        // invariants this implies `idx` is in bounds of `data`.
        unsafe { self.data.get_unchecked(y * self.stride + x) }
    }
}

impl<T: Clone> ImageView<'_, T> {
    /// Copies the viewed region into a tightly packed image.
    pub fn to_image(&self) -> Image<T> {
        let mut data = Vec::with_capacity(self.width * self.height);
        for y in 0..self.height {
            data.extend_from_slice(self.row(y));
        }

        Image {
            width: self.width,
            height: self.height,
            data,
        }
    }
}

#[derive(Debug)]
pub struct ImageViewMut<'a, T> {
    width: usize,
    height: usize,
    stride: usize,
    data: &'a mut [T],
}

impl<'a, T> ImageViewMut<'a, T> {
    pub fn from_slice_mut(
        width: usize,
        height: usize,
        stride: usize,
        data: &'a mut [T],
    ) -> Result<Self, Error> {
        check_layout(width, height, stride, data.len())?;

        Ok(Self {
            width,
            height,
            stride,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn row(&self, y: usize) -> &[T] {
        assert!(y < self.height, "row index out of bounds");
        let start = y * self.stride;
        &self.data[start..start + self.width]
    }

    pub fn row_mut(&mut self, y: usize) -> &mut [T] {
        assert!(y < self.height, "row index out of bounds");
        let start = y * self.stride;
        &mut self.data[start..start + self.width]
    }

    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(y * self.stride + x)
    }

    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut T> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get_mut(y * self.stride + x)
    }

    /// Writes `value` at signed coordinates, ignoring positions outside the view.
    ///
    /// Returns whether a pixel was written.
    pub fn put_clipped(&mut self, x: i64, y: i64, value: T) -> bool {
        if x < 0 || y < 0 {
            return false;
        }
        match self.get_mut(x as usize, y as usize) {
            Some(px) => {
                *px = value;
                true
            }
            None => false,
        }
    }

    pub fn subview_mut(
        &mut self,
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    ) -> Result<ImageViewMut<'_, T>, Error> {
        let start = subregion_start(self.width, self.height, self.stride, x, y, width, height)?;
        let tail = self.data.get_mut(start..).ok_or(Error::OutOfBounds)?;
        check_layout(width, height, self.stride, tail.len()).map_err(|_| Error::OutOfBounds)?;

        Ok(ImageViewMut {
            width,
            height,
            stride: self.stride,
            data: tail,
        })
    }

    pub fn as_view(&self) -> ImageView<'_, T> {
        ImageView {
            width: self.width,
            height: self.height,
            stride: self.stride,
            data: self.data,
        }
    }
}

impl<T: Clone> ImageViewMut<'_, T> {
    /// Copies `src` into this view starting at `(x, y)`.
    pub fn copy_from(&mut self, x: usize, y: usize, src: &ImageView<'_, T>) -> Result<(), Error> {
        let mut dst = self.subview_mut(x, y, src.width(), src.height())?;
        for row in 0..src.height() {
            dst.row_mut(row).clone_from_slice(src.row(row));
        }
        Ok(())
    }
}

fn check_layout(width: usize, height: usize, stride: usize, len: usize) -> Result<(), Error> {
    if stride < width {
        return Err(Error::InvalidStride);
    }

    let min_len = min_required_len(width, height, stride).ok_or(Error::SizeMismatch {
        expected: usize::MAX,
        actual: len,
    })?;

    if len < min_len {
        return Err(Error::SizeMismatch {
            expected: min_len,
            actual: len,
        });
    }

    Ok(())
}

fn subregion_start(
    parent_width: usize,
    parent_height: usize,
    stride: usize,
    x: usize,
    y: usize,
    width: usize,
    height: usize,
) -> Result<usize, Error> {
    if x > parent_width
        || y > parent_height
        || width > (parent_width - x)
        || height > (parent_height - y)
    {
        return Err(Error::OutOfBounds);
    }

    y.checked_mul(stride)
        .and_then(|v| v.checked_add(x))
        .ok_or(Error::OutOfBounds)
}

fn min_required_len(width: usize, height: usize, stride: usize) -> Option<usize> {
    if width == 0 || height == 0 {
        return Some(0);
    }

    let rows_before_last = height.checked_sub(1)?;
    let base = rows_before_last.checked_mul(stride)?;
    base.checked_add(width)
}

#[cfg(test)]
mod tests {
    use super::{Image, ImageView, ImageViewMut};
    use crate::Error;

    #[test]
    fn from_vec_rejects_wrong_length() {
        let err = Image::from_vec(3, 2, vec![0u8; 5]).expect_err("length mismatch");
        assert_eq!(
            err,
            Error::SizeMismatch {
                expected: 6,
                actual: 5
            }
        );
    }

    #[test]
    fn view_indexing_with_stride() {
        let data = vec![1u8, 2, 3, 99, 4, 5, 6, 88];
        let view = ImageView::from_slice(3, 2, 4, &data).expect("valid view");

        assert_eq!(view.row(0), &[1, 2, 3]);
        assert_eq!(view.row(1), &[4, 5, 6]);
        assert_eq!(view.get(2, 1), Some(&6));
        assert_eq!(view.get(3, 1), None);
        assert_eq!(view.to_image().data(), &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn put_clipped_ignores_outside_coordinates() {
        let mut img = Image::new_fill(3, 3, 0u8);
        let mut view = img.as_view_mut();

        assert!(view.put_clipped(2, 2, 7));
        assert!(!view.put_clipped(-1, 0, 7));
        assert!(!view.put_clipped(0, 3, 7));
        assert_eq!(img.data().iter().filter(|&&v| v == 7).count(), 1);
    }

    #[test]
    fn copy_from_places_source_at_offset() {
        let mut canvas = Image::new_fill(4, 3, 255u8);
        let patch = Image::from_vec(2, 2, vec![1u8, 2, 3, 4]).expect("valid image");

        canvas
            .as_view_mut()
            .copy_from(1, 1, &patch.as_view())
            .expect("patch fits");

        assert_eq!(
            canvas.data(),
            &[
                255, 255, 255, 255, //
                255, 1, 2, 255, //
                255, 3, 4, 255,
            ]
        );

        let err = canvas
            .as_view_mut()
            .copy_from(3, 2, &patch.as_view())
            .expect_err("patch overflows");
        assert_eq!(err, Error::OutOfBounds);
    }

    #[test]
    fn subview_mut_non_contiguous_parent() {
        let mut data = vec![
            1u8, 2, 3, 4, 0, // row 0
            5, 6, 7, 8, 0, // row 1
            9, 10, 11, 12, 0, // row 2
        ];

        let mut parent = ImageViewMut::from_slice_mut(4, 3, 5, &mut data).expect("valid parent");
        let mut sub = parent.subview_mut(1, 0, 2, 3).expect("valid subview");
        for y in 0..3 {
            for x in 0..2 {
                assert!(sub.put_clipped(x, y, 42));
            }
        }
        assert!(!sub.put_clipped(2, 0, 42));

        assert_eq!(parent.row(1), &[5, 42, 42, 8]);
        assert_eq!(data[14], 0);
    }

    #[test]
    fn flip_horizontal_reverses_each_row() {
        let img = Image::from_vec(3, 2, vec![1u8, 2, 3, 4, 5, 6]).expect("valid image");
        let flipped = img.flip_horizontal();

        assert_eq!(flipped.data(), &[3, 2, 1, 6, 5, 4]);
        assert_eq!(flipped.flip_horizontal(), img);
    }

    #[test]
    fn zip_map_requires_equal_dims() {
        let a = Image::new_fill(2, 2, 1u8);
        let b = Image::new_fill(2, 2, 2u8);
        let sum = a.zip_map(&b, |x, y| x + y).expect("same dims");
        assert!(sum.data().iter().all(|&v| v == 3));

        let c = Image::new_fill(3, 2, 0u8);
        assert_eq!(
            a.zip_map(&c, |x, y| x + y).expect_err("different dims"),
            Error::DimensionMismatch {
                expected: (2, 2),
                actual: (3, 2)
            }
        );
    }

    #[test]
    fn from_fn_is_row_major() {
        let img = Image::from_fn(3, 2, |x, y| (10 * y + x) as u8);
        assert_eq!(img.data(), &[0, 1, 2, 10, 11, 12]);
        assert_eq!(img.get(2, 1), Some(&12));
    }
}
