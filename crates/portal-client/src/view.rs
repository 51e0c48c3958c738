//! Render targets for widgets.
//!
//! A widget never looks its elements up; it is handed one handle per element
//! it owns. Handles take `&self` so a widget can be shared across concurrent
//! refreshes. The `Memory*` types keep their state in memory and back both
//! the tests and the terminal front end.

use std::sync::{
    atomic::{AtomicBool, AtomicUsize, Ordering},
    Mutex, MutexGuard,
};

/// A record that renders as one table row.
pub trait TableRow {
    /// Cell texts, in column order.
    fn cells(&self) -> Vec<String>;
}

/// A table whose rows a widget replaces wholesale.
pub trait TableView {
    /// Remove every row.
    fn clear(&self);

    /// Append one row after the existing ones.
    fn append_row(&self, cells: Vec<String>);

    /// Append rows in order. Data tables override this with a bulk load.
    fn add_rows(&self, rows: Vec<Vec<String>>) {
        for cells in rows {
            self.append_row(cells);
        }
    }

    /// Recompute column widths and redraw. Plain tables have nothing to do.
    fn redraw(&self) {}
}

pub trait TextView {
    fn set_text(&self, text: &str);
}

pub trait CheckboxView {
    fn set_checked(&self, checked: bool);
    fn is_checked(&self) -> bool;
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    // a panic mid-render leaves plain data behind, still fine to read
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[derive(Debug, Default)]
pub struct MemoryTable {
    rows: Mutex<Vec<Vec<String>>>,
    redraws: AtomicUsize,
}

impl MemoryTable {
    pub fn with_rows(rows: Vec<Vec<String>>) -> Self {
        Self {
            rows: Mutex::new(rows),
            redraws: AtomicUsize::new(0),
        }
    }

    pub fn rows(&self) -> Vec<Vec<String>> {
        lock(&self.rows).clone()
    }

    pub fn len(&self) -> usize {
        lock(&self.rows).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// How many times the table was redrawn.
    pub fn redraws(&self) -> usize {
        self.redraws.load(Ordering::SeqCst)
    }
}

impl TableView for MemoryTable {
    fn clear(&self) {
        lock(&self.rows).clear();
    }

    fn append_row(&self, cells: Vec<String>) {
        lock(&self.rows).push(cells);
    }

    fn add_rows(&self, rows: Vec<Vec<String>>) {
        lock(&self.rows).extend(rows);
    }

    fn redraw(&self) {
        self.redraws.fetch_add(1, Ordering::SeqCst);
    }
}

#[derive(Debug, Default)]
pub struct MemoryText {
    text: Mutex<String>,
}

impl MemoryText {
    pub fn new(text: &str) -> Self {
        Self {
            text: Mutex::new(text.to_owned()),
        }
    }

    pub fn text(&self) -> String {
        lock(&self.text).clone()
    }
}

impl TextView for MemoryText {
    fn set_text(&self, text: &str) {
        *lock(&self.text) = text.to_owned();
    }
}

#[derive(Debug, Default)]
pub struct MemoryCheckbox {
    checked: AtomicBool,
}

impl MemoryCheckbox {
    pub fn new(checked: bool) -> Self {
        Self {
            checked: AtomicBool::new(checked),
        }
    }
}

impl CheckboxView for MemoryCheckbox {
    fn set_checked(&self, checked: bool) {
        self.checked.store(checked, Ordering::SeqCst);
    }

    fn is_checked(&self) -> bool {
        self.checked.load(Ordering::SeqCst)
    }
}

/// Views behind shared pointers render into the same element.
impl<V: TableView + ?Sized> TableView for std::sync::Arc<V> {
    fn clear(&self) {
        (**self).clear()
    }

    fn append_row(&self, cells: Vec<String>) {
        (**self).append_row(cells)
    }

    fn add_rows(&self, rows: Vec<Vec<String>>) {
        (**self).add_rows(rows)
    }

    fn redraw(&self) {
        (**self).redraw()
    }
}

impl<V: TextView + ?Sized> TextView for std::sync::Arc<V> {
    fn set_text(&self, text: &str) {
        (**self).set_text(text)
    }
}

impl<V: CheckboxView + ?Sized> CheckboxView for std::sync::Arc<V> {
    fn set_checked(&self, checked: bool) {
        (**self).set_checked(checked)
    }

    fn is_checked(&self) -> bool {
        (**self).is_checked()
    }
}
