// ==========================================
// 饲养箱装备规划引擎 - 外部参考数据加载
// ==========================================
// 目录结构:
//   <data_dir>/catalog/*.json  装备目录分区 (每文件一个分区)
//   <data_dir>/animals/*.json  动物档案分区
// 文件按名称排序加载, 保证结果可复现
// ==========================================

use crate::catalog::error::{CatalogError, CatalogResult};
use crate::catalog::registry::{
    CatalogOptions, CatalogPartition, EquipmentCatalog, ProfileRegistry, ReferenceData,
};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const CATALOG_SUBDIR: &str = "catalog";
pub const ANIMALS_SUBDIR: &str = "animals";

/// 从目录加载完整参考数据
pub fn load_dir(data_dir: &Path, options: CatalogOptions) -> CatalogResult<ReferenceData> {
    info!(data_dir = %data_dir.display(), "从外部目录加载参考数据");

    let mut partitions = Vec::new();
    for path in json_files(&data_dir.join(CATALOG_SUBDIR))? {
        let name = partition_name(&path);
        let json = read(&path)?;
        debug!(partition = %name, "加载目录分区");
        partitions.push(CatalogPartition::from_json(&name, &json)?);
    }
    let catalog = EquipmentCatalog::from_partitions(partitions, options)?;

    let mut profiles = Vec::new();
    for path in json_files(&data_dir.join(ANIMALS_SUBDIR))? {
        let name = partition_name(&path);
        let json = read(&path)?;
        profiles.extend(ProfileRegistry::partition_from_json(&name, &json)?);
    }
    let profiles = ProfileRegistry::from_profiles(profiles)?;

    Ok(ReferenceData { catalog, profiles })
}

fn json_files(dir: &Path) -> CatalogResult<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|source| CatalogError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| CatalogError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) == Some("json") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn read(path: &Path) -> CatalogResult<String> {
    fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn partition_name(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("unknown")
        .to_string()
}
