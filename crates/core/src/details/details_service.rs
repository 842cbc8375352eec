use log::debug;
use std::sync::Arc;

use super::details_model::{RecordDetail, RecordTrackingItem};
use super::details_traits::RecordDetailServiceTrait;
use crate::catalog::CatalogServiceTrait;
use crate::errors::Result;
use crate::receipts::ReceiptServiceTrait;
use crate::records::RecordRepositoryTrait;
use crate::users::UserServiceTrait;

/// Composes records with display data from related entities.
///
/// Every lookup is independent; if any of them fails, the whole composed
/// read fails. There is no partial-result policy.
pub struct RecordDetailService {
    records: Arc<dyn RecordRepositoryTrait>,
    catalog: Arc<dyn CatalogServiceTrait>,
    users: Arc<dyn UserServiceTrait>,
    receipts: Arc<dyn ReceiptServiceTrait>,
}

impl RecordDetailService {
    pub fn new(
        records: Arc<dyn RecordRepositoryTrait>,
        catalog: Arc<dyn CatalogServiceTrait>,
        users: Arc<dyn UserServiceTrait>,
        receipts: Arc<dyn ReceiptServiceTrait>,
    ) -> Self {
        Self {
            records,
            catalog,
            users,
            receipts,
        }
    }
}

impl RecordDetailServiceTrait for RecordDetailService {
    fn get_record_detail(&self, record_id: &str) -> Result<RecordDetail> {
        let mut record = self.records.get_by_id(record_id)?;
        debug!("Composing detail view for record {}", record.id);

        let service = self.catalog.get_service(&record.service_id)?;
        let consultant = self.users.get_user(&record.consultant_id)?;
        let appraiser_name = match &record.appraiser_id {
            Some(appraiser_id) => Some(self.users.get_user(appraiser_id)?.name),
            None => None,
        };
        let receipt = self.receipts.get_receipt(&record.receipt_id)?;

        // Appraisal data stays hidden until an appraiser is assigned.
        if record.appraiser_id.is_none() {
            record.clear_diamond_attributes();
        }

        Ok(RecordDetail {
            record,
            service_name: service.name,
            consultant_name: consultant.name,
            appraiser_name,
            receipt_issued_at: receipt.issue_date,
        })
    }

    fn list_customer_records(&self, customer_id: &str) -> Result<Vec<RecordTrackingItem>> {
        let records = self.records.list_by_customer(customer_id)?;

        let mut items = Vec::with_capacity(records.len());
        for record in records {
            let service = self.catalog.get_service(&record.service_id)?;
            items.push(RecordTrackingItem {
                record_id: record.id,
                record_number: record.record_number,
                customer_name: record.customer_name,
                status: record.status,
                appointment_date: record.appointment_date,
                appointment_time: record.appointment_time,
                service_name: service.name,
                commitment_requested: record.commitment_requested,
            });
        }
        Ok(items)
    }
}
