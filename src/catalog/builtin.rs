// ==========================================
// 饲养箱装备规划引擎 - 内置参考数据
// ==========================================
// 编译期嵌入 data/ 下的 JSON, 无外部文件也可运行
// ==========================================

use crate::catalog::error::CatalogResult;
use crate::catalog::registry::{
    CatalogOptions, CatalogPartition, EquipmentCatalog, ProfileRegistry, ReferenceData,
};

const CATALOG_PARTITIONS: &[(&str, &str)] = &[
    ("enclosure", include_str!("../../data/catalog/enclosure.json")),
    ("lighting", include_str!("../../data/catalog/lighting.json")),
    ("heating", include_str!("../../data/catalog/heating.json")),
    ("substrate", include_str!("../../data/catalog/substrate.json")),
    ("bioactive", include_str!("../../data/catalog/bioactive.json")),
    ("humidity", include_str!("../../data/catalog/humidity.json")),
    ("decor", include_str!("../../data/catalog/decor.json")),
    ("monitoring", include_str!("../../data/catalog/monitoring.json")),
    ("water", include_str!("../../data/catalog/water.json")),
    ("feeding", include_str!("../../data/catalog/feeding.json")),
    ("aquatic", include_str!("../../data/catalog/aquatic.json")),
];

const ANIMAL_PARTITIONS: &[(&str, &str)] = &[
    ("reptiles", include_str!("../../data/animals/reptiles.json")),
    ("amphibians", include_str!("../../data/animals/amphibians.json")),
];

/// 内置装备目录
pub fn equipment_catalog(options: CatalogOptions) -> CatalogResult<EquipmentCatalog> {
    let partitions = CATALOG_PARTITIONS
        .iter()
        .map(|(name, json)| CatalogPartition::from_json(name, json))
        .collect::<CatalogResult<Vec<_>>>()?;
    EquipmentCatalog::from_partitions(partitions, options)
}

/// 内置动物档案
pub fn animal_profiles() -> CatalogResult<ProfileRegistry> {
    let mut profiles = Vec::new();
    for (name, json) in ANIMAL_PARTITIONS {
        profiles.extend(ProfileRegistry::partition_from_json(name, json)?);
    }
    ProfileRegistry::from_profiles(profiles)
}

pub fn reference_data(options: CatalogOptions) -> CatalogResult<ReferenceData> {
    Ok(ReferenceData {
        catalog: equipment_catalog(options)?,
        profiles: animal_profiles()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_data_loads_cleanly_in_strict_mode() {
        let data = reference_data(CatalogOptions { strict_tags: true }).unwrap();

        assert!(!data.catalog.is_empty());
        assert!(data.catalog.report().is_clean(), "{:?}", data.catalog.report());
        assert!(data.profiles.get("leopard-gecko").is_some());
    }

    #[test]
    fn test_builtin_required_equipment_exists_in_catalog() {
        let data = reference_data(CatalogOptions::default()).unwrap();

        for id in data.profiles.ids() {
            let profile = data.profiles.get(id).unwrap();
            for required in profile.required_equipment() {
                assert!(
                    data.catalog.contains(required),
                    "{} requires missing item {}",
                    id,
                    required
                );
            }
        }
    }
}
