//! Binary PCB streams.
//!
//! A stream starts with a little endian `u32` record count, followed by one
//! record per process made of three little endian `u32` values:
//! `remaining_burst_time`, `priority` and `arrival`.

use std::fs;
use std::path::Path;

use log::{debug, warn};

use crate::{LoadError, ProcessControlBlock, ReadyQueue};

const COUNT_SIZE: usize = 4;
const RECORD_SIZE: usize = 12;

fn read_u32(bytes: &[u8], offset: usize) -> Option<u32> {
    let field = bytes.get(offset..offset + 4)?;
    field.try_into().ok().map(u32::from_le_bytes)
}

/// Decodes a PCB stream into a ready queue
///
/// * `bytes` - the whole stream
///
/// A count of 0 gives an empty queue. A stream shorter than its count
/// requires is rejected before anything is allocated. Bytes after the last
/// record are ignored.
pub fn decode_process_control_blocks(bytes: &[u8]) -> Result<ReadyQueue, LoadError> {
    let truncated = |expected: usize| LoadError::Truncated {
        expected,
        found: bytes.len(),
    };

    let Some(count) = read_u32(bytes, 0) else {
        warn!("PCB stream too small to contain a count ({} bytes)", bytes.len());
        return Err(truncated(COUNT_SIZE));
    };

    let count = count as usize;
    let expected = count
        .checked_mul(RECORD_SIZE)
        .and_then(|size| size.checked_add(COUNT_SIZE))
        .ok_or(LoadError::TooManyRecords(count))?;

    if bytes.len() < expected {
        warn!(
            "PCB stream declares {} records but holds only {} bytes",
            count,
            bytes.len()
        );
        return Err(truncated(expected));
    }

    if bytes.len() > expected {
        warn!("ignoring {} trailing bytes in PCB stream", bytes.len() - expected);
    }

    let mut processes = Vec::with_capacity(count);

    for record in bytes[COUNT_SIZE..expected].chunks_exact(RECORD_SIZE) {
        let (Some(burst), Some(priority), Some(arrival)) =
            (read_u32(record, 0), read_u32(record, 4), read_u32(record, 8))
        else {
            return Err(truncated(expected));
        };

        processes.push(ProcessControlBlock::new(burst, priority, arrival));
    }

    let ready_queue = ReadyQueue::import(&processes)?;
    debug!("decoded {} process control blocks", ready_queue.len());
    Ok(ready_queue)
}

/// Encodes processes into a PCB stream readable by
/// `decode_process_control_blocks`
pub fn encode_process_control_blocks(processes: &[ProcessControlBlock]) -> Result<Vec<u8>, LoadError> {
    let count = u32::try_from(processes.len()).map_err(|_| LoadError::TooManyRecords(processes.len()))?;

    let mut bytes = Vec::with_capacity(COUNT_SIZE + processes.len() * RECORD_SIZE);
    bytes.extend_from_slice(&count.to_le_bytes());

    for pcb in processes {
        bytes.extend_from_slice(&pcb.remaining_burst_time.to_le_bytes());
        bytes.extend_from_slice(&pcb.priority.to_le_bytes());
        bytes.extend_from_slice(&pcb.arrival.to_le_bytes());
    }

    Ok(bytes)
}

/// Reads and decodes the PCB file at `path`
pub fn load_process_control_blocks<P: AsRef<Path>>(path: P) -> Result<ReadyQueue, LoadError> {
    let path = path.as_ref();

    let bytes = fs::read(path).map_err(|err| {
        warn!("failed to read {}: {}", path.display(), err);
        LoadError::Io(err)
    })?;

    decode_process_control_blocks(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stream(words: &[u32]) -> Vec<u8> {
        words.iter().flat_map(|word| word.to_le_bytes()).collect()
    }

    #[test]
    fn decodes_three_field_records() {
        let bytes = stream(&[2, 5, 1, 0, 8, 2, 2]);

        let ready_queue = decode_process_control_blocks(&bytes).unwrap();

        assert_eq!(
            ready_queue.export(),
            vec![
                ProcessControlBlock::new(5, 1, 0),
                ProcessControlBlock::new(8, 2, 2)
            ]
        );
        assert!(ready_queue.iter().all(|pcb| !pcb.started));
    }

    #[test]
    fn encode_then_decode_keeps_fields() {
        let processes = [
            ProcessControlBlock::new(5, 1, 0),
            ProcessControlBlock::new(8, 2, 2),
        ];

        let bytes = encode_process_control_blocks(&processes).unwrap();
        assert_eq!(bytes.len(), 4 + 2 * 12);

        let ready_queue = decode_process_control_blocks(&bytes).unwrap();
        assert_eq!(ready_queue.len(), 2);
        for (decoded, original) in ready_queue.iter().zip(processes.iter()) {
            assert_eq!(decoded.remaining_burst_time, original.remaining_burst_time);
            assert_eq!(decoded.priority, original.priority);
            assert_eq!(decoded.arrival, original.arrival);
            assert!(!decoded.started);
        }
    }

    #[test]
    fn zero_count_is_an_empty_queue() {
        let mut ready_queue = decode_process_control_blocks(&stream(&[0])).unwrap();

        assert!(ready_queue.is_empty());
        assert_eq!(ready_queue.capacity(), 16);
        ready_queue.push_back(ProcessControlBlock::new(1, 0, 0)).unwrap();
        assert_eq!(ready_queue.len(), 1);
    }

    #[test]
    fn missing_count_is_truncated() {
        assert!(matches!(
            decode_process_control_blocks(&[1, 0]),
            Err(LoadError::Truncated { expected: 4, found: 2 })
        ));
    }

    #[test]
    fn incomplete_record_is_truncated() {
        /* Two records declared, only one field of the first written */
        let bytes = stream(&[2, 5]);

        assert!(matches!(
            decode_process_control_blocks(&bytes),
            Err(LoadError::Truncated { expected: 28, found: 8 })
        ));
    }

    #[test]
    fn huge_count_is_rejected_without_allocating() {
        let bytes = stream(&[u32::MAX, 1, 2, 3]);

        assert!(matches!(
            decode_process_control_blocks(&bytes),
            Err(LoadError::Truncated { .. }) | Err(LoadError::TooManyRecords(_))
        ));
    }

    #[test]
    fn trailing_bytes_are_ignored() {
        let mut bytes = stream(&[1, 3, 0, 7]);
        bytes.extend_from_slice(&[0xff, 0xff]);

        let ready_queue = decode_process_control_blocks(&bytes).unwrap();
        assert_eq!(ready_queue.export(), vec![ProcessControlBlock::new(3, 0, 7)]);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let path = std::env::temp_dir().join("scheduler-loader-does-not-exist.bin");

        assert!(matches!(
            load_process_control_blocks(&path),
            Err(LoadError::Io(_))
        ));
    }
}
