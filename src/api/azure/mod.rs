//
//  duplo-client
//  api/azure/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Azure resources managed through the control plane.

pub mod cosmos;
pub mod mysql;
pub mod storage_account;
pub mod storage_resources;

pub use cosmos::CosmosDbAccount;
pub use mysql::{MySqlDatabase, MySqlServer, MySqlServerRequest};
pub use storage_account::StorageAccount;
pub use storage_resources::{StorageBlobContainer, StorageFileShare, StorageQueue, StorageResource, StorageTable};
