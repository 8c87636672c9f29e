//! Mapping between `mesos_dns_domain::RecordType` and `hickory_proto::rr::RecordType`.

use mesos_dns_domain::RecordType;
use hickory_proto::rr::RecordType as HickoryRecordType;

pub struct RecordTypeMapper;

impl RecordTypeMapper {
    /// Query type for a lookup; `None` asks for everything (`ANY`).
    pub fn to_hickory(record_type: Option<RecordType>) -> HickoryRecordType {
        match record_type {
            None => HickoryRecordType::ANY,
            Some(RecordType::A) => HickoryRecordType::A,
            Some(RecordType::NS) => HickoryRecordType::NS,
            Some(RecordType::CNAME) => HickoryRecordType::CNAME,
            Some(RecordType::SOA) => HickoryRecordType::SOA,
            Some(RecordType::PTR) => HickoryRecordType::PTR,
            Some(RecordType::MX) => HickoryRecordType::MX,
            Some(RecordType::TXT) => HickoryRecordType::TXT,
            Some(RecordType::HINFO) => HickoryRecordType::HINFO,
            Some(RecordType::AAAA) => HickoryRecordType::AAAA,
            Some(RecordType::NAPTR) => HickoryRecordType::NAPTR,
            Some(RecordType::SRV) => HickoryRecordType::SRV,
        }
    }

    /// Returns `None` for types outside the eleven Mesos-DNS serves.
    pub fn from_hickory(hickory_type: HickoryRecordType) -> Option<RecordType> {
        match hickory_type {
            HickoryRecordType::A => Some(RecordType::A),
            HickoryRecordType::NS => Some(RecordType::NS),
            HickoryRecordType::CNAME => Some(RecordType::CNAME),
            HickoryRecordType::SOA => Some(RecordType::SOA),
            HickoryRecordType::PTR => Some(RecordType::PTR),
            HickoryRecordType::MX => Some(RecordType::MX),
            HickoryRecordType::TXT => Some(RecordType::TXT),
            HickoryRecordType::HINFO => Some(RecordType::HINFO),
            HickoryRecordType::AAAA => Some(RecordType::AAAA),
            HickoryRecordType::NAPTR => Some(RecordType::NAPTR),
            HickoryRecordType::SRV => Some(RecordType::SRV),
            _ => None,
        }
    }
}
