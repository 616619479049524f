// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Platform setup: turning configuration into climate entities.

use std::collections::HashSet;

use crate::config::{ClimateConfig, PublishFailurePolicy};
use crate::device::FujitsuClimate;
use crate::error::{ConfigError, Error};
use crate::protocol::Publisher;

/// Integration domain, also the unique id prefix.
pub const DOMAIN: &str = "ir_climate";

/// Entity platforms this integration provides.
pub const PLATFORMS: [&str; 1] = ["climate"];

/// Creates one climate entity from a platform configuration.
///
/// # Errors
///
/// Returns `ConfigError::MissingField` if the name or topic is blank.
pub fn setup_platform<P: Publisher>(
    config: ClimateConfig,
    publisher: P,
) -> Result<FujitsuClimate<P>, Error> {
    config.validate()?;

    tracing::info!(
        name = %config.name,
        topic = %config.topic,
        qos = %config.qos,
        retain = config.retain,
        "Setting up climate entity"
    );

    Ok(FujitsuClimate::new(config, publisher))
}

/// Like [`setup_platform`], overriding the configured failure policy.
///
/// # Errors
///
/// Returns `ConfigError::MissingField` if the name or topic is blank.
pub fn setup_platform_with_policy<P: Publisher>(
    config: ClimateConfig,
    publisher: P,
    policy: PublishFailurePolicy,
) -> Result<FujitsuClimate<P>, Error> {
    setup_platform(config.with_failure_policy(policy), publisher)
}

/// Creates an entity for each configuration, all sharing one publisher.
///
/// # Errors
///
/// Returns error if any configuration is invalid or two entries would get
/// the same unique id. No entities are returned in that case.
pub fn setup_platforms<P, I>(configs: I, publisher: &P) -> Result<Vec<FujitsuClimate<P>>, Error>
where
    P: Publisher + Clone,
    I: IntoIterator<Item = ClimateConfig>,
{
    let mut seen = HashSet::new();
    let mut entities = Vec::new();

    for config in configs {
        let entity = setup_platform(config, publisher.clone())?;
        if !seen.insert(entity.unique_id().to_string()) {
            return Err(ConfigError::DuplicateUniqueId(entity.unique_id().to_string()).into());
        }
        entities.push(entity);
    }

    Ok(entities)
}
