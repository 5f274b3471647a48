//! Per-record emission seam used while hotels are being extracted.

use tripscrape_core::HotelRecord;

/// Receives each [`HotelRecord`] as soon as the extractor builds it.
///
/// Emission order matches the order of the returned batch.
pub trait RecordSink {
    fn emit(&mut self, hotel: &HotelRecord);
}

/// Discards every record.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl RecordSink for NullSink {
    fn emit(&mut self, _hotel: &HotelRecord) {}
}

impl RecordSink for Vec<HotelRecord> {
    fn emit(&mut self, hotel: &HotelRecord) {
        self.push(hotel.clone());
    }
}

impl<S: RecordSink + ?Sized> RecordSink for &mut S {
    fn emit(&mut self, hotel: &HotelRecord) {
        (**self).emit(hotel);
    }
}
