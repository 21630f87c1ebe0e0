// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Translations are Fluent `.ftl` files embedded from `assets/i18n/`. The
//! locale is taken from the `--lang` argument, then `[general] language` in
//! the config, then the system locale, and finally `en-US`.

pub mod fluent;
