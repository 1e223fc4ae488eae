use super::cells::CellArray;

/// Iterator over the cells of a [`CellArray`], yielding point id slices.
pub struct CellIter<'a> {
    cells: &'a CellArray,
    index: usize,
}

impl<'a> CellIter<'a> {
    pub fn new(cells: &'a CellArray) -> Self {
        Self { cells, index: 0 }
    }
}

impl<'a> Iterator for CellIter<'a> {
    type Item = &'a [u32];

    fn next(&mut self) -> Option<&'a [u32]> {
        let cell = self.cells.get(self.index)?;
        self.index += 1;
        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.cells.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CellIter<'_> {}
