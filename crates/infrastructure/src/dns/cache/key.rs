use compact_str::CompactString;
use mesos_dns_domain::RecordType;
use smallvec::SmallVec;
use std::fmt;

/// Identity of a cached lookup: the name plus the requested types, in the
/// order they were requested.
///
/// `[A, AAAA]` and `[AAAA, A]` are distinct keys.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub name: CompactString,
    pub record_types: SmallVec<[RecordType; 4]>,
}

impl CacheKey {
    #[inline]
    pub fn new(name: &str, record_types: &[RecordType]) -> Self {
        Self {
            name: CompactString::from(name),
            record_types: SmallVec::from_slice(record_types),
        }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, RecordType::join(&self.record_types))
    }
}
