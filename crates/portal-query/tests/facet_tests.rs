//! Carousel bucketing over catalog entities.

use portal_domain::catalog::{CenterType, Equipment};
use portal_domain::ids::EquipmentId;
use portal_i18n::LocalizedText;
use portal_query::{facet, facet_counts, BucketDef};

fn equipment(
    name: &str,
    center_type: Option<CenterType>,
    tags: &[&str],
    featured: bool,
) -> Equipment {
    Equipment {
        id: EquipmentId::generate(),
        name: LocalizedText::plain(name),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        center_type,
        is_featured: featured,
    }
}

fn fleet(any_featured: bool) -> Vec<Equipment> {
    vec![
        equipment(
            "Gas chromatograph",
            Some(CenterType::Analysis),
            &["chromatography"],
            any_featured,
        ),
        equipment("Core scanner", Some(CenterType::Research), &[], false),
        equipment(
            "Portable spectrometer",
            Some(CenterType::Analysis),
            &["spectroscopy"],
            false,
        ),
        equipment("Training rig", Some(CenterType::Training), &[], false),
    ]
}

fn center_buckets() -> Vec<BucketDef<Equipment>> {
    vec![
        BucketDef::all("All equipment"),
        BucketDef::new("analysis", "Analysis", |e: &Equipment| {
            e.center_type == Some(CenterType::Analysis)
        }),
        BucketDef::new("research", "Research", |e: &Equipment| {
            e.center_type == Some(CenterType::Research)
        }),
        BucketDef::new("training", "Training", |e: &Equipment| {
            e.center_type == Some(CenterType::Training)
        }),
    ]
}

#[test]
fn center_type_buckets_partition_the_fleet() {
    let items = fleet(false);
    let buckets = facet(&items, &center_buckets(), |e| e.is_featured);

    let by_id: Vec<(&str, usize)> = buckets
        .iter()
        .map(|b| (b.id.as_str(), b.count))
        .collect();
    assert_eq!(
        by_id,
        [("all", 4), ("analysis", 2), ("research", 1), ("training", 1)]
    );

    // The named buckets are mutually exclusive here, so they sum to the
    // fleet size.
    let named_total: usize = buckets.iter().skip(1).map(|b| b.count).sum();
    assert_eq!(named_total, items.len());
}

#[test]
fn all_bucket_shows_featured_when_any_exists() {
    let items = fleet(true);
    let buckets = facet(&items, &center_buckets(), |e| e.is_featured);
    assert_eq!(buckets[0].count, 1);
    assert_eq!(
        buckets[0].items[0].name.resolve(portal_i18n::Locale::En),
        "Gas chromatograph"
    );
}

#[test]
fn tag_buckets_may_overlap() {
    let items = fleet(false);
    let defs = vec![
        BucketDef::new("spectroscopy", "Spectroscopy", |e: &Equipment| {
            e.has_tag("spectroscopy")
        }),
        BucketDef::new("analysis", "Analysis", |e: &Equipment| {
            e.center_type == Some(CenterType::Analysis)
        }),
    ];
    let counts = facet_counts(&items, &defs, |e| e.is_featured);
    // The spectrometer appears in both buckets.
    assert_eq!(counts, [("spectroscopy".to_string(), 1), ("analysis".to_string(), 2)]);
}
