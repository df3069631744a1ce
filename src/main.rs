//! gridwire - demo driver for the change-propagating cell grid.
//!
//! Fills a 50x26 sheet the way a UI smoke test would: scattered literals,
//! a column of labels, and a column of references pointing at them, while a
//! subscriber counts the republished value notifications.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Result;
use gridwire::Sheet;
use rand::Rng;

const ROWS: usize = 50;
const COLS: usize = 26;

fn main() -> Result<()> {
    let mut sheet = Sheet::new(ROWS, COLS);

    let notifications = Rc::new(RefCell::new(0usize));
    let counter = Rc::clone(&notifications);
    sheet.subscribe(move |_cell, _property| {
        *counter.borrow_mut() += 1;
    });

    // Scatter a fixed label into random cells.
    let mut rng = rand::thread_rng();
    for _ in 0..50 {
        let row = rng.gen_range(0..ROWS - 1);
        let col = rng.gen_range(0..COLS - 1);
        sheet.set_text(row, col, "I love spreadsheets")?;
    }

    // Fill column B with labels, then point column A at them.
    for row in 0..ROWS {
        sheet.set_text(row, 1, &format!("This is cell B{}", row + 1))?;
    }
    for row in 0..ROWS {
        sheet.set_text(row, 0, &format!("=B{}", row + 1))?;
    }

    for row in 0..5 {
        if let Some(cell) = sheet.get_cell(row, 0) {
            println!("A{} = {:?}", row + 1, cell.value());
        }
    }
    println!("{} value notifications delivered", notifications.borrow());

    Ok(())
}
