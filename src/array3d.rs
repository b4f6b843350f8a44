use crate::error::{Array3DError, Result};

/// Fixed-size 3D array with the shape baked into the type.
///
/// Elements are stored contiguously in row-major order: the third coordinate
/// varies fastest, so iteration visits `(0, 0, 0), (0, 0, 1), ..., (D1 - 1, D2 - 1, D3 - 1)`.
///
/// Comparisons are lexicographic over that flattened order. With partially
/// ordered elements such as `f64`, the first incomparable pair (a NaN) makes the
/// whole comparison `None`, so `a <= b` and `a >= b` are then both `false`.
///
/// All dimensions must be non-zero; instantiating a constructor with a zero
/// dimension fails to compile:
///
/// ```compile_fail
/// let _ = grid3::Array3D::<u8, 0, 1, 1>::new();
/// ```
///
/// ```compile_fail
/// let _ = grid3::Array3D::<u8, 0, 1, 1>::from([[[0u8; 1]; 1]; 0]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Array3D<T, const D1: usize, const D2: usize, const D3: usize> {
    elems: [[[T; D3]; D2]; D1],
}

impl<T, const D1: usize, const D2: usize, const D3: usize> Array3D<T, D1, D2, D3> {
    /// Total number of elements, `D1 * D2 * D3`.
    pub const LEN: usize = D1 * D2 * D3;

    const NONZERO_DIMS: () = assert!(
        D1 > 0 && D2 > 0 && D3 > 0,
        "Array3D dimensions must all be non-zero"
    );

    pub fn new() -> Self
    where
        T: Default,
    {
        Self::from_fn(|_| T::default())
    }

    pub fn from_elem(value: T) -> Self
    where
        T: Clone,
    {
        Self::from_fn(|_| value.clone())
    }

    /// Builds an array by calling `f` once per position, in flattened order.
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut((usize, usize, usize)) -> T,
    {
        let () = Self::NONZERO_DIMS;
        Self {
            elems: std::array::from_fn(|i| {
                std::array::from_fn(|j| std::array::from_fn(|k| f((i, j, k))))
            }),
        }
    }

    pub fn into_inner(self) -> [[[T; D3]; D2]; D1] {
        self.elems
    }

    /// Flat offset of `(i, j, k)`: `i * D2 * D3 + j * D3 + k`.
    pub const fn offset((i, j, k): (usize, usize, usize)) -> usize {
        i * D2 * D3 + j * D3 + k
    }

    /// Inverse of [`Array3D::offset`].
    pub const fn coords(offset: usize) -> (usize, usize, usize) {
        (offset / (D2 * D3), (offset / D3) % D2, offset % D3)
    }

    pub fn data(&self) -> &[T] {
        self.elems.as_flattened().as_flattened()
    }

    pub fn data_mut(&mut self) -> &mut [T] {
        self.elems.as_flattened_mut().as_flattened_mut()
    }

    pub fn as_ptr(&self) -> *const T {
        self.data().as_ptr()
    }

    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.data_mut().as_mut_ptr()
    }

    pub const fn size_1d(&self) -> usize {
        D1
    }

    pub const fn size_2d(&self) -> usize {
        D2
    }

    pub const fn size_3d(&self) -> usize {
        D3
    }

    pub const fn len(&self) -> usize {
        Self::LEN
    }

    pub const fn size(&self) -> usize {
        Self::LEN
    }

    pub const fn max_size(&self) -> usize {
        Self::LEN
    }

    /// Always `false`: zero-sized dimensions cannot be constructed.
    pub const fn is_empty(&self) -> bool {
        false
    }

    pub fn front(&self) -> &T {
        &self.elems[0][0][0]
    }

    pub fn front_mut(&mut self) -> &mut T {
        &mut self.elems[0][0][0]
    }

    pub fn back(&self) -> &T {
        &self.elems[D1 - 1][D2 - 1][D3 - 1]
    }

    pub fn back_mut(&mut self) -> &mut T {
        &mut self.elems[D1 - 1][D2 - 1][D3 - 1]
    }

    fn check(pos: (usize, usize, usize)) -> Result<()> {
        let (i, j, k) = pos;
        if i >= D1 || j >= D2 || k >= D3 {
            tracing::debug!(index = ?pos, shape = ?(D1, D2, D3), "rejected out-of-range access");
            return Err(Array3DError::OutOfRange {
                index: pos,
                shape: (D1, D2, D3),
            });
        }
        Ok(())
    }

    /// Range-checked access.
    pub fn at(&self, pos: (usize, usize, usize)) -> Result<&T> {
        Self::check(pos)?;
        let (i, j, k) = pos;
        Ok(&self.elems[i][j][k])
    }

    /// Range-checked mutable access.
    pub fn at_mut(&mut self, pos: (usize, usize, usize)) -> Result<&mut T> {
        Self::check(pos)?;
        let (i, j, k) = pos;
        Ok(&mut self.elems[i][j][k])
    }

    pub fn get(&self, (i, j, k): (usize, usize, usize)) -> Option<&T> {
        self.elems.get(i)?.get(j)?.get(k)
    }

    pub fn get_mut(&mut self, (i, j, k): (usize, usize, usize)) -> Option<&mut T> {
        self.elems.get_mut(i)?.get_mut(j)?.get_mut(k)
    }

    /// Access without bounds checking.
    ///
    /// # Safety
    ///
    /// `i < D1`, `j < D2` and `k < D3` must all hold.
    pub unsafe fn get_unchecked(&self, pos: (usize, usize, usize)) -> &T {
        debug_assert!(pos.0 < D1 && pos.1 < D2 && pos.2 < D3);
        // SAFETY: the caller guarantees `pos` is in bounds, so its offset is below `LEN`.
        unsafe { self.data().get_unchecked(Self::offset(pos)) }
    }

    /// Mutable access without bounds checking.
    ///
    /// # Safety
    ///
    /// `i < D1`, `j < D2` and `k < D3` must all hold.
    pub unsafe fn get_unchecked_mut(&mut self, pos: (usize, usize, usize)) -> &mut T {
        debug_assert!(pos.0 < D1 && pos.1 < D2 && pos.2 < D3);
        let offset = Self::offset(pos);
        // SAFETY: the caller guarantees `pos` is in bounds, so its offset is below `LEN`.
        unsafe { self.data_mut().get_unchecked_mut(offset) }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data().iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data_mut().iter_mut()
    }

    /// Iterates from the last element back to the first.
    pub fn iter_rev(&self) -> std::iter::Rev<std::slice::Iter<'_, T>> {
        self.iter().rev()
    }

    pub fn iter_rev_mut(&mut self) -> std::iter::Rev<std::slice::IterMut<'_, T>> {
        self.iter_mut().rev()
    }

    /// Iterates in flattened order, pairing each element with its coordinates.
    pub fn indexed_iter(
        &self,
    ) -> impl DoubleEndedIterator<Item = ((usize, usize, usize), &T)> + ExactSizeIterator + '_ {
        self.iter()
            .enumerate()
            .map(|(offset, value)| (Self::coords(offset), value))
    }

    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.data_mut().fill(value);
    }

    /// Same as [`Array3D::fill`].
    pub fn assign(&mut self, value: T)
    where
        T: Clone,
    {
        self.fill(value);
    }

    /// Exchanges every element with the one at the same position in `other`.
    pub fn swap(&mut self, other: &mut Self) {
        self.data_mut().swap_with_slice(other.data_mut());
    }

    /// Copies `src` into `self` element by element, converting each value.
    pub fn assign_from<U>(&mut self, src: &Array3D<U, D1, D2, D3>) -> &mut Self
    where
        U: Clone + Into<T>,
    {
        for (dst, value) in self.iter_mut().zip(src.iter()) {
            *dst = value.clone().into();
        }
        self
    }

    pub fn map<U, F>(self, mut f: F) -> Array3D<U, D1, D2, D3>
    where
        F: FnMut(T) -> U,
    {
        Array3D {
            elems: self
                .elems
                .map(|plane| plane.map(|row| row.map(&mut f))),
        }
    }

    pub fn convert<U>(&self) -> Array3D<U, D1, D2, D3>
    where
        T: Clone + Into<U>,
    {
        self.clone().map(Into::into)
    }
}

impl<T: Default, const D1: usize, const D2: usize, const D3: usize> Default
    for Array3D<T, D1, D2, D3>
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const D1: usize, const D2: usize, const D3: usize> From<[[[T; D3]; D2]; D1]>
    for Array3D<T, D1, D2, D3>
{
    fn from(elems: [[[T; D3]; D2]; D1]) -> Self {
        let () = Self::NONZERO_DIMS;
        Self { elems }
    }
}

impl<T, const D1: usize, const D2: usize, const D3: usize> AsRef<[T]> for Array3D<T, D1, D2, D3> {
    fn as_ref(&self) -> &[T] {
        self.data()
    }
}

impl<T, const D1: usize, const D2: usize, const D3: usize> AsMut<[T]> for Array3D<T, D1, D2, D3> {
    fn as_mut(&mut self) -> &mut [T] {
        self.data_mut()
    }
}

impl<T, const D1: usize, const D2: usize, const D3: usize> std::ops::Index<(usize, usize, usize)>
    for Array3D<T, D1, D2, D3>
{
    type Output = T;
    fn index(&self, (i, j, k): (usize, usize, usize)) -> &T {
        &self.elems[i][j][k]
    }
}

impl<T, const D1: usize, const D2: usize, const D3: usize>
    std::ops::IndexMut<(usize, usize, usize)> for Array3D<T, D1, D2, D3>
{
    fn index_mut(&mut self, (i, j, k): (usize, usize, usize)) -> &mut T {
        &mut self.elems[i][j][k]
    }
}

impl<'a, T, const D1: usize, const D2: usize, const D3: usize> IntoIterator
    for &'a Array3D<T, D1, D2, D3>
{
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, const D1: usize, const D2: usize, const D3: usize> IntoIterator
    for &'a mut Array3D<T, D1, D2, D3>
{
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T, const D1: usize, const D2: usize, const D3: usize> IntoIterator
    for Array3D<T, D1, D2, D3>
{
    type Item = T;
    type IntoIter =
        std::iter::Flatten<std::iter::Flatten<std::array::IntoIter<[[T; D3]; D2], D1>>>;
    fn into_iter(self) -> Self::IntoIter {
        self.elems.into_iter().flatten().flatten()
    }
}
