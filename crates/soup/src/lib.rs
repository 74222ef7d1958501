//! Reader and writer for the triangle soup binary format.
//!
//! The format is a fixed little-endian ABI with no version tag or schema.
//! Consumers must know the layout below out of band.
//!
//! ```text
//! header   u32  total file size in bytes (header included)
//!          u32  record size in bytes (always 76)
//! record   f32 x 3  p0
//!          f32 x 3  p1
//!          f32 x 3  p2
//!          f32 x 3  normal
//!          f32      roughness
//!          f32      metallic
//!          f32      emission
//!          f32 x 3  color (r, g, b)
//!          u32      face index
//! ```
//!
//! Records follow the header back to back with no padding.

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io::{Read, Write};
use std::path::Path;
use trisoup_mesh::{Color, Triangle, TriangleMesh, Vector3};

/// Number of `f32` fields in a record.
pub const FLOAT_FIELDS: usize = 18;

/// Number of `u32` fields in a record.
pub const INTEGER_FIELDS: usize = 1;

/// Size of one triangle record on disk.
///
/// Derived from the fields written, not from the in-memory `Triangle`.
pub const RECORD_SIZE: u32 = (FLOAT_FIELDS * 4 + INTEGER_FIELDS * 4) as u32;

/// Size of the file header: the file size and the record size.
pub const HEADER_SIZE: u32 = 8;

static_assertions::const_assert_eq!(RECORD_SIZE, 76);

/// Returns the size in bytes of a file holding `triangles` records, or `None`
/// if it cannot be represented in the header.
pub fn file_size(triangles: usize) -> Option<u32> {
    u32::try_from(triangles)
        .ok()?
        .checked_mul(RECORD_SIZE)?
        .checked_add(HEADER_SIZE)
}

fn write_vector<W: Write + ?Sized>(w: &mut W, v: &Vector3) -> std::io::Result<()> {
    w.write_f32::<LittleEndian>(v.x)?;
    w.write_f32::<LittleEndian>(v.y)?;
    w.write_f32::<LittleEndian>(v.z)
}

fn read_vector<R: Read + ?Sized>(r: &mut R) -> std::io::Result<Vector3> {
    Ok(Vector3 {
        x: r.read_f32::<LittleEndian>()?,
        y: r.read_f32::<LittleEndian>()?,
        z: r.read_f32::<LittleEndian>()?,
    })
}

fn clamp_color(color: Color) -> Color {
    color.map(|c| c.clamp(0.0, 1.0))
}

fn write_record<W: Write + ?Sized>(
    w: &mut W,
    t: &Triangle,
    color: Option<Color>,
) -> std::io::Result<()> {
    write_vector(w, &t.p0)?;
    write_vector(w, &t.p1)?;
    write_vector(w, &t.p2)?;
    write_vector(w, &t.normal)?;
    w.write_f32::<LittleEndian>(t.roughness)?;
    w.write_f32::<LittleEndian>(t.metallic)?;
    w.write_f32::<LittleEndian>(t.emission)?;
    for c in color.map(clamp_color).unwrap_or(t.color) {
        w.write_f32::<LittleEndian>(c)?;
    }
    w.write_u32::<LittleEndian>(t.face_index)
}

fn read_record<R: Read + ?Sized>(r: &mut R) -> std::io::Result<Triangle> {
    Ok(Triangle {
        p0: read_vector(r)?,
        p1: read_vector(r)?,
        p2: read_vector(r)?,
        normal: read_vector(r)?,
        roughness: r.read_f32::<LittleEndian>()?,
        metallic: r.read_f32::<LittleEndian>()?,
        emission: r.read_f32::<LittleEndian>()?,
        color: [
            r.read_f32::<LittleEndian>()?,
            r.read_f32::<LittleEndian>()?,
            r.read_f32::<LittleEndian>()?,
        ],
        face_index: r.read_u32::<LittleEndian>()?,
    })
}

fn write_binary<M: TriangleMesh, W: Write + ?Sized>(
    w: &mut W,
    mesh: &M,
    color: Option<Color>,
) -> std::io::Result<()> {
    // The header and the records must describe the same triangles.
    let triangles = mesh.as_triangle_slice();
    let size = file_size(triangles.len()).ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!(
                "{} triangles do not fit in a 32-bit file size",
                triangles.len()
            ),
        )
    })?;

    w.write_u32::<LittleEndian>(size)?;
    w.write_u32::<LittleEndian>(RECORD_SIZE)?;
    for t in triangles {
        write_record(w, t, color)?;
    }
    Ok(())
}

fn invalid_data(message: String) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::InvalidData, message)
}

fn read_binary<M: TriangleMesh, R: Read + ?Sized>(r: &mut R) -> std::io::Result<M> {
    let size = r.read_u32::<LittleEndian>()?;
    let record_size = r.read_u32::<LittleEndian>()?;
    if record_size != RECORD_SIZE {
        return Err(invalid_data(format!(
            "record size is {} bytes, expected {}",
            record_size, RECORD_SIZE
        )));
    }

    let Some(body) = size
        .checked_sub(HEADER_SIZE)
        .filter(|body| body % RECORD_SIZE == 0)
    else {
        return Err(invalid_data(format!(
            "file size {} is not a header plus a whole number of records",
            size
        )));
    };

    let n_triangles = (body / RECORD_SIZE) as usize;
    // The header is not trusted for the allocation; a lying size runs into EOF.
    let mut data = Vec::<Triangle>::with_capacity(n_triangles.min(1 << 16));
    for _ in 0..n_triangles {
        data.push(read_record(r)?);
    }
    Ok(M::from_triangles(data))
}

/// Writes `mesh` to `w`.
///
/// When `color` is given it replaces the color of every triangle, clamped to
/// `[0, 1]` per channel. Otherwise each triangle's own color is written as is.
pub fn write_soup<M: TriangleMesh, W: Write>(
    w: &mut W,
    mesh: &M,
    color: Option<Color>,
) -> std::io::Result<()> {
    write_binary(w, mesh, color)
}

pub fn write_soup_file<M: TriangleMesh, P: AsRef<Path>>(
    p: P,
    mesh: &M,
    color: Option<Color>,
) -> std::io::Result<()> {
    let f = std::fs::File::create(p)?;
    let mut w = std::io::BufWriter::new(f);
    write_binary(&mut w, mesh, color)?;
    w.flush()
}

pub fn read_soup<M: TriangleMesh, P: AsRef<Path>>(p: P) -> std::io::Result<M> {
    let f = std::fs::File::open(p)?;
    read_binary(&mut std::io::BufReader::new(f))
}

pub fn parse_soup<M: TriangleMesh>(data: &[u8]) -> std::io::Result<M> {
    let mut c = std::io::Cursor::new(data);
    read_binary(&mut c)
}

pub trait SoupReader: Read {
    fn read_soup<M: TriangleMesh>(&mut self) -> std::io::Result<M>;
}

impl<T: Read> SoupReader for T {
    fn read_soup<M: TriangleMesh>(&mut self) -> std::io::Result<M> {
        read_binary(self)
    }
}

pub trait SoupWriter: Write {
    fn write_soup<M: TriangleMesh>(&mut self, mesh: &M, color: Option<Color>) -> std::io::Result<()>;
}

impl<T: Write> SoupWriter for T {
    fn write_soup<M: TriangleMesh>(&mut self, mesh: &M, color: Option<Color>) -> std::io::Result<()> {
        write_binary(self, mesh, color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trisoup_mesh::MeshBuffer;

    fn triangle() -> Triangle {
        Triangle {
            p0: Vector3::new(1.0, 2.0, 3.0),
            p1: Vector3::new(4.0, 5.0, 6.0),
            p2: Vector3::new(7.0, 8.0, 9.0),
            normal: Vector3::new(0.0, 0.0, 1.0),
            roughness: 0.25,
            metallic: 0.5,
            emission: 0.75,
            color: [1.5, -0.5, 0.5],
            face_index: 0x0403_0201,
        }
    }

    #[test]
    fn record_size_is_not_memory_layout() {
        assert_eq!(76, RECORD_SIZE);
        assert_eq!(RECORD_SIZE as usize, FLOAT_FIELDS * 4 + INTEGER_FIELDS * 4);
    }

    #[test]
    fn file_size_limits() {
        assert_eq!(Some(8), file_size(0));
        assert_eq!(Some(160), file_size(2));
        assert_eq!(None, file_size(u32::MAX as usize));
    }

    #[test]
    fn empty_mesh_is_just_a_header() {
        let mut out = Vec::new();
        write_soup(&mut out, &MeshBuffer::new(), None).unwrap();
        assert_eq!(vec![8, 0, 0, 0, 76, 0, 0, 0], out);
    }

    #[test]
    fn record_layout() {
        let mesh = MeshBuffer::from_triangles(vec![triangle()]);
        let mut out = Vec::new();
        write_soup(&mut out, &mesh, None).unwrap();
        assert_eq!(84, out.len());
        assert_eq!(&84u32.to_le_bytes(), &out[0..4]);
        assert_eq!(&76u32.to_le_bytes(), &out[4..8]);
        assert_eq!(&1.0f32.to_le_bytes(), &out[8..12]);
        // normal.z
        assert_eq!(&1.0f32.to_le_bytes(), &out[52..56]);
        assert_eq!(&0.25f32.to_le_bytes(), &out[56..60]);
        // Unclamped color.
        assert_eq!(&1.5f32.to_le_bytes(), &out[68..72]);
        assert_eq!(&(-0.5f32).to_le_bytes(), &out[72..76]);
        assert_eq!(&[1, 2, 3, 4], &out[80..84]);
    }

    #[test]
    fn override_color_is_clamped() {
        let mesh = MeshBuffer::from_triangles(vec![triangle(), triangle()]);
        let mut out = Vec::new();
        out.write_soup(&mesh, Some([2.0, -1.0, 0.3])).unwrap();
        let read: MeshBuffer = parse_soup(&out).unwrap();
        for t in read.triangles() {
            assert_eq!([1.0, 0.0, 0.3], t.color);
            assert_eq!(0.25, t.roughness);
        }
    }

    /// A mesh that keeps its triangles in a plain vector.
    struct Soup(Vec<Triangle>);

    impl TriangleMesh for Soup {
        fn from_triangles(triangles: Vec<Triangle>) -> Self {
            Soup(triangles)
        }

        fn as_triangle_slice(&self) -> &[Triangle] {
            &self.0
        }
    }

    #[test]
    fn header_size_matches_written_records() {
        let mesh = Soup(vec![triangle(), triangle()]);
        let mut out = Vec::new();
        write_soup(&mut out, &mesh, None).unwrap();
        assert_eq!(160, out.len());
        assert_eq!(&160u32.to_le_bytes(), &out[0..4]);

        let read: Soup = parse_soup(&out).unwrap();
        assert_eq!(2, read.triangle_count());
        assert_eq!(mesh.0, read.0);
    }

    #[test]
    fn round_trip() {
        let mut second = triangle();
        second.normal = Vector3::new(0.0, 0.0, 0.0);
        second.face_index = 1;
        second.color = [f32::MIN_POSITIVE, 0.1, f32::MAX];
        let mesh = MeshBuffer::from_triangles(vec![triangle(), second]);
        let mut out = Vec::new();
        write_soup(&mut out, &mesh, None).unwrap();
        let read: MeshBuffer = std::io::Cursor::new(out).read_soup().unwrap();
        assert_eq!(mesh, read);
    }

    #[test]
    fn rejects_wrong_record_size() {
        let mut data = vec![8, 0, 0, 0, 80, 0, 0, 0];
        let err = parse_soup::<MeshBuffer>(&data).unwrap_err();
        assert_eq!(std::io::ErrorKind::InvalidData, err.kind());

        data[4] = 76;
        data[0] = 9;
        let err = parse_soup::<MeshBuffer>(&data).unwrap_err();
        assert_eq!(std::io::ErrorKind::InvalidData, err.kind());
    }

    #[test]
    fn rejects_truncated_file() {
        let mesh = MeshBuffer::from_triangles(vec![triangle()]);
        let mut out = Vec::new();
        write_soup(&mut out, &mesh, None).unwrap();
        out.truncate(60);
        let err = parse_soup::<MeshBuffer>(&out).unwrap_err();
        assert_eq!(std::io::ErrorKind::UnexpectedEof, err.kind());
    }
}
