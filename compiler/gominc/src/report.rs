use std::io::{self, Write};

use gomin_rewrite::RenameTable;

/// Write one `original: short` line per rename, sorted by original name.
pub fn write_report<W: Write + ?Sized>(table: &RenameTable, out: &mut W) -> io::Result<()> {
    for (original, short) in table.sorted() {
        writeln!(out, "{original}: {short}")?;
    }
    Ok(())
}
