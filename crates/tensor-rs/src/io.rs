//! Single-file tensor archives for host-side persistence.
//!
//! Layout: magic header, version word, bincode-serialized index (entry name,
//! dims, dtype code, byte offset, byte length), then raw little-endian
//! element data. Archives are homogeneous: one tensor type per file.

use crate::dtype;
use crate::shape::Shape;
use crate::storage::StorageElement;
use crate::tensor::Tensor;
use crate::types::TensorType;
use anyhow::{anyhow, bail, ensure, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Read, Seek, SeekFrom, Write};
use std::path::Path;

const MAGIC: &[u8; 8] = b"TRSARCHV";
const VERSION: u32 = 1;

#[derive(Clone, Debug, Serialize, Deserialize)]
struct ArchiveIndex {
    entries: Vec<ArchiveIndexEntry>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct ArchiveIndexEntry {
    name: String,
    dims: Vec<u64>,
    dtype_code: u32,
    offset: u64,
    len: u64,
}

pub struct TensorArchive;

impl TensorArchive {
    /// Writes the named tensors to a new archive file.
    pub fn save<T: TensorType>(
        path: impl AsRef<Path>,
        tensors: &BTreeMap<String, Tensor<T>>,
    ) -> Result<()> {
        let dtype = T::dtype();
        let mut index_entries = Vec::with_capacity(tensors.len());
        let mut running_offset: u64 = 0;
        for (name, tensor) in tensors {
            let len = (tensor.num_elements() * dtype.byte_size()) as u64;
            index_entries.push(ArchiveIndexEntry {
                name: name.clone(),
                dims: tensor.shape().dims().iter().map(|&d| d as u64).collect(),
                dtype_code: dtype.code(),
                offset: running_offset,
                len,
            });
            running_offset = running_offset
                .checked_add(len)
                .ok_or_else(|| anyhow!("archive data offset overflow"))?;
        }

        let mut index = ArchiveIndex {
            entries: index_entries,
        };
        let index_bytes_rel = bincode::serialize(&index)?;
        let index_len = index_bytes_rel.len();
        ensure!(index_len <= u32::MAX as usize, "archive index too large");

        let data_start = (MAGIC.len() + 4 + 4 + index_len) as u64;
        for entry in index.entries.iter_mut() {
            entry.offset = entry
                .offset
                .checked_add(data_start)
                .ok_or_else(|| anyhow!("archive offset overflow"))?;
        }
        let index_bytes = bincode::serialize(&index)?;
        ensure!(
            index_bytes.len() == index_len,
            "archive index length changed after offset fixup"
        );

        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(MAGIC)?;
        writer.write_all(&VERSION.to_le_bytes())?;
        writer.write_all(&(index_len as u32).to_le_bytes())?;
        writer.write_all(&index_bytes)?;
        for tensor in tensors.values() {
            let mut bytes = Vec::with_capacity(tensor.num_elements() * dtype.byte_size());
            for &value in tensor.data() {
                value.write_le(&mut bytes);
            }
            writer.write_all(&bytes)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Reads every tensor from an archive file.
    ///
    /// Entries whose dtype code differs from `T`'s descriptor are rejected.
    pub fn load<T: TensorType>(path: impl AsRef<Path>) -> Result<BTreeMap<String, Tensor<T>>> {
        let mut file = File::open(path)?;

        let mut magic = [0u8; 8];
        file.read_exact(&mut magic)?;
        if &magic != MAGIC {
            bail!("invalid tensor archive magic header");
        }
        let version = read_u32(&mut file)?;
        if version != VERSION {
            bail!("unsupported tensor archive version {}", version);
        }

        let index_len = read_u32(&mut file)? as usize;
        let mut index_bytes = vec![0u8; index_len];
        file.read_exact(&mut index_bytes)?;
        let index: ArchiveIndex = bincode::deserialize(&index_bytes)?;

        let dtype = T::dtype();
        let mut tensors = BTreeMap::new();
        for entry in index.entries {
            if entry.dtype_code != dtype.code() {
                let found = dtype::lookup_code(entry.dtype_code)
                    .map(|descriptor| descriptor.name().to_string())
                    .unwrap_or_else(|| format!("code {}", entry.dtype_code));
                bail!(
                    "tensor '{}' holds {} data, archive opened as {}",
                    entry.name,
                    found,
                    dtype.name()
                );
            }
            let dims = entry
                .dims
                .iter()
                .map(|&d| {
                    usize::try_from(d).map_err(|_| anyhow!("tensor '{}' dim overflow", entry.name))
                })
                .collect::<Result<Vec<_>>>()?;

            file.seek(SeekFrom::Start(entry.offset))?;
            let byte_len = entry.len as usize;
            ensure!(
                byte_len % dtype.byte_size() == 0,
                "tensor '{}' data size misaligned",
                entry.name
            );
            let mut raw = vec![0u8; byte_len];
            file.read_exact(&mut raw)?;

            let mut values = Vec::with_capacity(byte_len / dtype.byte_size());
            for chunk in raw.chunks_exact(dtype.byte_size()) {
                values.push(<T::Elem as StorageElement>::read_le(chunk));
            }
            let tensor = Tensor::from_slice(Shape::of(dims), &values)?;
            tensors.insert(entry.name, tensor);
        }
        Ok(tensors)
    }
}

fn read_u32(reader: &mut impl Read) -> Result<u32> {
    let mut buf = [0u8; 4];
    reader.read_exact(&mut buf)?;
    Ok(u32::from_le_bytes(buf))
}
