// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 装配领域服务与基础设施实现（context），以及接口层使用的数据传输对象（dto）
pub mod context;
pub mod dto;
