//
//  duplo-client
//  api/aws/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! AWS resources managed through the control plane.

pub mod mq;
pub mod sns;

pub use mq::{MqBrokerRequest, MqBrokerResponse, MqBrokerUpdateRequest, MqConfigRequest, MqConfigResponse};
pub use sns::{SnsTopic, SnsTopicAttributes, SnsTopicRequest};
