// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 搜索索引抽象
///
/// 定义关系库的全文检索镜像契约，实现见 `infrastructure::search`
pub mod index;
