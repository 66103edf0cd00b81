// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据传输对象模块
///
/// 定义接口层返回给客户端的响应体
pub mod error_response;
pub mod reindex_response;
