use std::fmt;
use std::io;

/// Failures reported by `DynArray`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DynArrayError {
    /// The element type has no size
    ZeroSizedElement,
    /// The requested size is above `MAX_CAPACITY`
    CapacityExceeded,
    /// The backing store could not grow
    AllocationFailed,
    OutOfBounds { index: usize, len: usize },
    Empty,
}

impl fmt::Display for DynArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DynArrayError::ZeroSizedElement => write!(f, "element type has zero size"),
            DynArrayError::CapacityExceeded => write!(f, "requested capacity exceeds the maximum"),
            DynArrayError::AllocationFailed => write!(f, "failed to grow the backing store"),
            DynArrayError::OutOfBounds { index, len } => {
                write!(f, "index {} is out of bounds for length {}", index, len)
            }
            DynArrayError::Empty => write!(f, "the array is empty"),
        }
    }
}

impl std::error::Error for DynArrayError {}

/// Failures reported by the scheduling algorithms
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchedulerError {
    /// Round robin was asked to run with a quantum of 0
    ZeroQuantum,
    /// Round robin was selected without giving a quantum
    MissingQuantum,
    UnknownAlgorithm(String),
    /// The simulation did not finish within its tick budget
    SimulationDiverged { ticks: u64 },
    Queue(DynArrayError),
}

impl fmt::Display for SchedulerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchedulerError::ZeroQuantum => write!(f, "the time quantum must be positive"),
            SchedulerError::MissingQuantum => write!(f, "round robin needs a time quantum"),
            SchedulerError::UnknownAlgorithm(name) => {
                write!(f, "unknown scheduling algorithm `{}` (expected FCFS, SJF, P, RR or SRT)", name)
            }
            SchedulerError::SimulationDiverged { ticks } => {
                write!(f, "simulation did not finish after {} ticks", ticks)
            }
            SchedulerError::Queue(err) => write!(f, "ready queue error: {}", err),
        }
    }
}

impl std::error::Error for SchedulerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SchedulerError::Queue(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DynArrayError> for SchedulerError {
    fn from(err: DynArrayError) -> Self {
        SchedulerError::Queue(err)
    }
}

/// Failures while reading or writing a binary PCB stream
#[derive(Debug)]
pub enum LoadError {
    Io(io::Error),
    /// The stream ends before the declared number of records
    Truncated { expected: usize, found: usize },
    /// More records than the 32 bit count field can describe
    TooManyRecords(usize),
    Queue(DynArrayError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(err) => write!(f, "i/o error: {}", err),
            LoadError::Truncated { expected, found } => {
                write!(f, "truncated PCB stream: expected {} bytes, found {}", expected, found)
            }
            LoadError::TooManyRecords(count) => {
                write!(f, "{} records do not fit in a 32 bit count", count)
            }
            LoadError::Queue(err) => write!(f, "ready queue error: {}", err),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(err) => Some(err),
            LoadError::Queue(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> Self {
        LoadError::Io(err)
    }
}

impl From<DynArrayError> for LoadError {
    fn from(err: DynArrayError) -> Self {
        LoadError::Queue(err)
    }
}
