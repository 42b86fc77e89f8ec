// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
pub mod decode_tests;
pub mod non_rp_tests;
