// Copyright (C) 2025 Stacks Open Internet Foundation
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

use std::env;

use lazy_static::lazy_static;
use slog::{o, Drain, Level, Logger, Record};

lazy_static! {
    pub static ref LOGGER: Logger = make_logger();
}

fn inner_get_loglevel() -> Level {
    if env::var("CL_LOG_TRACE") == Ok("1".into()) {
        Level::Trace
    } else if env::var("CL_LOG_DEBUG") == Ok("1".into()) {
        Level::Debug
    } else {
        Level::Info
    }
}

lazy_static! {
    static ref LOGLEVEL: Level = inner_get_loglevel();
}

pub fn get_loglevel() -> Level {
    *LOGLEVEL
}

fn make_logger() -> Logger {
    let decorator = slog_term::PlainSyncDecorator::new(std::io::stderr());
    let drain = slog_term::FullFormat::new(decorator)
        .build()
        .filter(|record: &Record| record.level().is_at_least(get_loglevel()));
    Logger::root(drain.fuse(), o!())
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => ({
        slog::error!($crate::util::log::LOGGER, $($arg)*)
    })
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => ({
        slog::warn!($crate::util::log::LOGGER, $($arg)*)
    })
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => ({
        slog::info!($crate::util::log::LOGGER, $($arg)*)
    })
}

#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => ({
        slog::debug!($crate::util::log::LOGGER, $($arg)*)
    })
}

#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => ({
        slog::trace!($crate::util::log::LOGGER, $($arg)*)
    })
}
