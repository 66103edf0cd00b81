// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod app_api_test;
pub mod crowd_app_api_test;
pub mod health_check;
pub mod job_api_test;
pub mod task_api_test;
