// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod records_csv_datasource;
        pub(crate) mod records_store_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod amount_model;
        pub(crate) mod iso_date_model;
        pub(crate) mod timestamp_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod records_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod aggregation;
        pub(crate) mod new_parking_record;
        pub(crate) mod parking_record;
        pub(crate) mod record_filters;
        pub(crate) mod settings;
        pub(crate) mod suggestion;
    }
    pub(crate) mod logic {
        pub(crate) mod aggregator;
        pub(crate) mod entry_validator;
        pub(crate) mod korean_collation;
        pub(crate) mod suggester;
        mod utils;
    }
    pub(crate) mod repositories {
        pub(crate) mod records_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod entry_usecase;
        pub(crate) mod query_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod aggregation_fmt;
    pub(crate) mod utils;
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::aggregation::*;
        pub use crate::domain::entities::new_parking_record::*;
        pub use crate::domain::entities::parking_record::*;
        pub use crate::domain::entities::record_filters::*;
        pub use crate::domain::entities::settings::*;
        pub use crate::domain::entities::suggestion::*;
        pub use crate::presentation::aggregation_fmt::NO_DATA_LABEL;
    }

    pub mod stores {
        pub use crate::data::datasources::records_store_datasource::{
            MemoryRecordsDatasource, RecordsStoreDatasource,
        };
    }
}
