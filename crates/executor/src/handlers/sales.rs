//! Sale command handlers.
//!
//! Sales have no schema; the file is returned exactly as stored.

use std::sync::Arc;

use flatstore_core::Resource;
use flatstore_storage::FileStore;

use crate::bridge::records_to_values;
use crate::{Output, Result};

/// Handle SaleList command.
pub fn sale_list(store: &Arc<FileStore>) -> Result<Output> {
    let sales = store.load(Resource::Sales)?;
    Ok(Output::Records(records_to_values(sales)))
}
