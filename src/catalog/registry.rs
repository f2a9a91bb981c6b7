// ==========================================
// 饲养箱装备规划引擎 - 参考数据注册表
// ==========================================
// 职责: 多分区目录合并为不可变注册表; 动物档案注册表
// 红线: 构建完成后只读, 通过引用注入引擎 (可替换为测试夹具)
// ==========================================

use crate::catalog::error::{CatalogError, CatalogResult};
use crate::catalog::record::RawEquipmentRecord;
use crate::domain::animal::AnimalProfile;
use crate::domain::equipment::EquipmentConfig;
use crate::domain::types::EquipmentCategory;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{info, warn};

// ==========================================
// LoadReport - 加载诊断
// ==========================================
// 非致命问题: 丢弃的标签、悬空的 requiredWith 引用

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadDiagnostic {
    pub item_id: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct LoadReport {
    diagnostics: Vec<LoadDiagnostic>,
}

impl LoadReport {
    pub fn record(&mut self, item_id: &str, message: String) {
        self.diagnostics.push(LoadDiagnostic {
            item_id: item_id.to_string(),
            message,
        });
    }

    pub fn diagnostics(&self) -> &[LoadDiagnostic] {
        &self.diagnostics
    }

    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

// ==========================================
// CatalogPartition - 目录分区 (按类别拆分的 JSON)
// ==========================================
#[derive(Debug, Clone)]
pub struct CatalogPartition {
    pub name: String,
    pub entries: BTreeMap<String, RawEquipmentRecord>,
}

impl CatalogPartition {
    pub fn from_json(name: &str, json: &str) -> CatalogResult<Self> {
        let entries = serde_json::from_str(json).map_err(|source| CatalogError::Parse {
            partition: name.to_string(),
            source,
        })?;

        Ok(Self {
            name: name.to_string(),
            entries,
        })
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogOptions {
    /// 非法标签直接报错 (默认丢弃并记录)
    pub strict_tags: bool,
}

// ==========================================
// EquipmentCatalog - 装备目录注册表
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct EquipmentCatalog {
    items: BTreeMap<String, EquipmentConfig>,
    report: LoadReport,
}

impl EquipmentCatalog {
    /// 合并多个分区 (显式构建步骤)
    ///
    /// # 规则
    /// - 跨分区重复 ID -> 错误
    /// - 悬空 requiredWith -> 记录诊断 (生成时静默跳过)
    pub fn from_partitions(
        partitions: Vec<CatalogPartition>,
        options: CatalogOptions,
    ) -> CatalogResult<Self> {
        let mut items: BTreeMap<String, EquipmentConfig> = BTreeMap::new();
        let mut origin: BTreeMap<String, String> = BTreeMap::new();
        let mut report = LoadReport::default();

        for partition in partitions {
            for (id, raw) in partition.entries {
                if let Some(first) = origin.get(&id) {
                    return Err(CatalogError::DuplicateId {
                        id,
                        first: first.clone(),
                        second: partition.name.clone(),
                    });
                }
                let config = raw.into_config(&id, options.strict_tags, &mut report)?;
                origin.insert(id.clone(), partition.name.clone());
                items.insert(id, config);
            }
        }

        let catalog = Self::finish(items, report);
        info!(
            item_count = catalog.len(),
            diagnostics = catalog.report.diagnostics().len(),
            "装备目录构建完成"
        );
        Ok(catalog)
    }

    /// 从已规范化条目构建 (测试夹具/程序化目录)
    pub fn from_configs(configs: Vec<EquipmentConfig>) -> CatalogResult<Self> {
        let mut items = BTreeMap::new();
        for config in configs {
            if items.contains_key(&config.id) {
                return Err(CatalogError::DuplicateId {
                    id: config.id.clone(),
                    first: "fixture".to_string(),
                    second: "fixture".to_string(),
                });
            }
            items.insert(config.id.clone(), config);
        }
        Ok(Self::finish(items, LoadReport::default()))
    }

    fn finish(items: BTreeMap<String, EquipmentConfig>, mut report: LoadReport) -> Self {
        for config in items.values() {
            for dependency in &config.required_with {
                if !items.contains_key(dependency) {
                    warn!(item_id = %config.id, dependency = %dependency, "requiredWith 引用了不存在的装备");
                    report.record(
                        &config.id,
                        format!("requiredWith references unknown item '{}'", dependency),
                    );
                }
            }
        }
        Self { items, report }
    }

    pub fn get(&self, id: &str) -> Option<&EquipmentConfig> {
        self.items.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.contains_key(id)
    }

    /// 按 ID 字典序遍历 (确定性)
    pub fn iter(&self) -> impl Iterator<Item = &EquipmentConfig> {
        self.items.values()
    }

    pub fn in_category(
        &self,
        category: EquipmentCategory,
    ) -> impl Iterator<Item = &EquipmentConfig> {
        self.items.values().filter(move |c| c.category == category)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn report(&self) -> &LoadReport {
        &self.report
    }
}

// ==========================================
// ProfileRegistry - 动物档案注册表
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ProfileRegistry {
    profiles: BTreeMap<String, AnimalProfile>,
}

impl ProfileRegistry {
    /// 解析 JSON 分区 ({ "<id>": profile, ... })
    pub fn partition_from_json(name: &str, json: &str) -> CatalogResult<Vec<AnimalProfile>> {
        let raw: BTreeMap<String, AnimalProfile> =
            serde_json::from_str(json).map_err(|source| CatalogError::Parse {
                partition: name.to_string(),
                source,
            })?;

        raw.into_iter()
            .map(|(key, mut profile)| {
                if profile.id.is_empty() {
                    profile.id = key;
                } else if profile.id != key {
                    return Err(CatalogError::InvalidProfile {
                        id: key,
                        message: format!("id field '{}' does not match its key", profile.id),
                    });
                }
                Ok(profile)
            })
            .collect()
    }

    pub fn from_profiles(profiles: Vec<AnimalProfile>) -> CatalogResult<Self> {
        let mut map = BTreeMap::new();
        for profile in profiles {
            validate_profile(&profile)?;
            if map.contains_key(&profile.id) {
                return Err(CatalogError::InvalidProfile {
                    id: profile.id.clone(),
                    message: "duplicate animal id".to_string(),
                });
            }
            map.insert(profile.id.clone(), profile);
        }

        info!(profile_count = map.len(), "动物档案加载完成");
        Ok(Self { profiles: map })
    }

    pub fn get(&self, id: &str) -> Option<&AnimalProfile> {
        self.profiles.get(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

/// 档案加载期校验
///
/// # 规则
/// 1. id 非空
/// 2. 最小尺寸三轴均为正数
/// 3. 温度/湿度 min <= max
/// 4. UVB 覆盖率位于 0..=100
fn validate_profile(profile: &AnimalProfile) -> CatalogResult<()> {
    let invalid = |message: &str| CatalogError::InvalidProfile {
        id: profile.id.clone(),
        message: message.to_string(),
    };

    if profile.id.trim().is_empty() {
        return Err(invalid("empty id"));
    }

    let size = &profile.min_enclosure_size;
    if size.width <= 0.0 || size.depth <= 0.0 || size.height <= 0.0 {
        return Err(invalid("minimum enclosure dimensions must be positive"));
    }

    let targets = &profile.care_targets;
    if targets.temperature.min > targets.temperature.max {
        return Err(invalid("temperature.min exceeds temperature.max"));
    }
    if targets.humidity.min > targets.humidity.max {
        return Err(invalid("humidity.min exceeds humidity.max"));
    }
    if !(0.0..=100.0).contains(&targets.lighting.coverage_percent) {
        return Err(invalid("lighting.coveragePercent must be within 0..=100"));
    }

    Ok(())
}

// ==========================================
// ReferenceData - 目录 + 档案
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    pub catalog: EquipmentCatalog,
    pub profiles: ProfileRegistry,
}
