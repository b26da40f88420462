//! Binary container format for a section manager
//!
//! Layout (all integers little-endian):
//!
//! ```text
//! magic    [u8; 4]  "SPL\0"
//! version  u16
//! locked   u8
//! columns  u32 length + UTF-8, ";"-delimited column identifiers
//! count    u32
//! then per section:
//!   start  i64
//!   end    i64      -1 encodes an open end
//!   name   u32 length + UTF-8
//!   tag    u32 length + UTF-8
//! ```
//!
//! Timestamps pass through a caller-supplied mapping on read, so a file
//! saved against one time base can be reopened against another. The open
//! sentinel is never mapped.

use crate::{ColumnSet, Error, Result, SectionManager, TimeSection, Timestamp, OPEN_END};
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io::{Read, Write};

/// Magic bytes for the splits format: "SPL\0"
const MAGIC: [u8; 4] = [b'S', b'P', b'L', 0];

/// Current format version
const VERSION: u16 = 1;

/// Open-end sentinel on the wire.
const WIRE_OPEN_END: i64 = -1;

/// Writes the manager to a writer.
pub fn write_to<W: Write>(manager: &SectionManager, mut writer: W) -> Result<()> {
    writer.write_all(&MAGIC)?;
    writer.write_u16::<LittleEndian>(VERSION)?;
    writer.write_u8(manager.locked() as u8)?;
    write_string(&mut writer, &manager.visible_columns().to_delimited())?;

    writer.write_u32::<LittleEndian>(manager.len() as u32)?;
    for section in manager.sections() {
        writer.write_i64::<LittleEndian>(section.start)?;
        let end = if section.is_open() { WIRE_OPEN_END } else { section.end };
        writer.write_i64::<LittleEndian>(end)?;
        write_string(&mut writer, &section.name)?;
        write_string(&mut writer, &section.tag)?;
    }

    Ok(())
}

/// Reads a manager from a reader, applying `map_time` to every finite
/// timestamp.
///
/// Sections go back through [`SectionManager::insert`], so the ordering
/// invariant is re-established even if the mapping reordered the starts.
/// Trailing bytes after the last section are ignored.
pub fn read_from<R, F>(mut reader: R, map_time: F) -> Result<SectionManager>
where
    R: Read,
    F: Fn(Timestamp) -> Timestamp,
{
    // Read and validate magic bytes.
    let mut magic = [0u8; 4];
    reader.read_exact(&mut magic)?;
    if magic != MAGIC {
        return Err(Error::InvalidMagic);
    }

    let version = reader.read_u16::<LittleEndian>()?;
    if version != VERSION {
        return Err(Error::UnsupportedVersion(version));
    }

    let mut manager = SectionManager::new();
    manager.set_locked(reader.read_u8()? != 0);
    manager.set_visible_columns(ColumnSet::parse_delimited(&read_string(&mut reader)?));

    let count = reader.read_u32::<LittleEndian>()?;
    for _ in 0..count {
        let start = map_time(reader.read_i64::<LittleEndian>()?);
        let end = reader.read_i64::<LittleEndian>()?;
        let end = if end == WIRE_OPEN_END { OPEN_END } else { map_time(end) };
        let name = read_string(&mut reader)?;
        let tag = read_string(&mut reader)?;

        manager.insert(TimeSection::new(start, end).with_name(name).with_tag(tag));
    }

    Ok(manager)
}

fn write_string<W: Write>(writer: &mut W, s: &str) -> Result<()> {
    writer.write_u32::<LittleEndian>(s.len() as u32)?;
    writer.write_all(s.as_bytes())?;
    Ok(())
}

fn read_string<R: Read>(reader: &mut R) -> Result<String> {
    let len = reader.read_u32::<LittleEndian>()?;
    let mut data = vec![0u8; len as usize];
    reader.read_exact(&mut data)?;
    Ok(String::from_utf8(data)?)
}
