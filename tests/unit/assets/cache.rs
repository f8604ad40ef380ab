use std::io::Cursor;

use super::*;

fn temp_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "written_book_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

fn write_png(path: &Path, img: RgbaImage) {
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    std::fs::write(path, &buf).unwrap();
}

#[test]
fn canonical_path_folds_dot_segments_against_base() {
    let base = PathBuf::from("/theme/root");
    assert_eq!(
        AssetCache::canonical_path("a/./b/../c.png", Some(base.as_path())),
        PathBuf::from("/theme/root/a/c.png")
    );
    assert_eq!(
        AssetCache::canonical_path("/abs/x.png", Some(base.as_path())),
        PathBuf::from("/abs/x.png")
    );
    assert_eq!(
        AssetCache::canonical_path("/../x.png", None),
        PathBuf::from("/x.png")
    );
}

#[test]
fn canonical_path_defaults_to_current_dir() {
    let cwd = std::env::current_dir().unwrap();
    let got = AssetCache::canonical_path("no_such_dir_for_written_book/x.png", None);
    assert_eq!(got, fold_segments(&cwd.join("no_such_dir_for_written_book/x.png")));
}

#[test]
fn canonical_path_expands_tilde() {
    let Ok(home) = std::env::var("HOME") else {
        return;
    };
    let got = AssetCache::canonical_path("~/written_book_missing.png", None);
    assert_eq!(got, fold_segments(&PathBuf::from(home).join("written_book_missing.png")));
}

#[test]
fn load_same_path_only_decodes_once() {
    let tmp = temp_dir("cache_decode_once");
    std::fs::create_dir_all(&tmp).unwrap();
    let png = tmp.join("img.png");
    write_png(&png, RgbaImage::from_raw(1, 1, vec![1, 2, 3, 255]).unwrap());

    let cache = AssetCache::new();
    let (key_a, a) = cache.load(&png).unwrap();
    let (key_b, b) = cache.load(tmp.join("sub/../img.png")).unwrap();
    assert_eq!(key_a, key_b);
    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!(cache.decode_count(&png), 1);
    assert_eq!(cache.len(), 1);
    assert!(cache.contains(tmp.join("./img.png")));

    std::fs::remove_dir_all(&tmp).ok();
}

#[test]
fn concurrent_loads_decode_once() {
    let tmp = temp_dir("cache_concurrent");
    std::fs::create_dir_all(&tmp).unwrap();
    let png = tmp.join("img.png");
    write_png(&png, RgbaImage::from_pixel(8, 8, image::Rgba([5, 6, 7, 255])));

    let cache = AssetCache::new();
    let images: Vec<Arc<RgbaImage>> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| s.spawn(|| cache.load(&png).unwrap().1))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(cache.decode_count(&png), 1);
    assert!(images.iter().all(|img| Arc::ptr_eq(img, &images[0])));

    std::fs::remove_dir_all(&tmp).ok();
}

#[test]
fn failed_load_leaves_no_entry() {
    let tmp = temp_dir("cache_missing");
    std::fs::create_dir_all(&tmp).unwrap();
    let bogus = tmp.join("bogus.png");
    std::fs::write(&bogus, b"not an image").unwrap();

    let cache = AssetCache::new();
    let err = cache.load(tmp.join("missing.png")).unwrap_err();
    assert!(err.to_string().contains("read asset bytes"));
    let err = cache.load(&bogus).unwrap_err();
    assert!(err.to_string().contains("decode asset"));
    assert!(cache.is_empty());
    assert_eq!(cache.decode_count(&bogus), 0);

    std::fs::remove_dir_all(&tmp).ok();
}

#[test]
fn evict_forces_a_fresh_decode() {
    let tmp = temp_dir("cache_evict");
    std::fs::create_dir_all(&tmp).unwrap();
    let png = tmp.join("img.png");
    write_png(&png, RgbaImage::from_raw(1, 1, vec![1, 2, 3, 255]).unwrap());

    let cache = AssetCache::new();
    let (_, first) = cache.load(&png).unwrap();
    assert!(cache.evict(&png));
    assert!(!cache.evict(&png));
    assert!(!cache.contains(&png));
    assert!(cache.get(&png).is_none());

    let (_, second) = cache.load(&png).unwrap();
    assert!(!Arc::ptr_eq(&first, &second));
    assert_eq!(first.as_raw(), second.as_raw());
    assert_eq!(cache.decode_count(&png), 1);

    cache.clear();
    assert!(cache.is_empty());
    assert_eq!(first.get_pixel(0, 0).0, [1, 2, 3, 255]);

    std::fs::remove_dir_all(&tmp).ok();
}

#[test]
fn len_counts_distinct_decoded_paths() {
    let tmp = temp_dir("cache_len");
    std::fs::create_dir_all(&tmp).unwrap();
    write_png(&tmp.join("a.png"), RgbaImage::from_raw(1, 1, vec![1, 2, 3, 255]).unwrap());
    write_png(&tmp.join("b.png"), RgbaImage::from_raw(1, 1, vec![4, 5, 6, 255]).unwrap());

    let cache = AssetCache::new();
    cache.load(tmp.join("a.png")).unwrap();
    cache.load(tmp.join("./a.png")).unwrap();
    cache.load(tmp.join("b.png")).unwrap();
    assert!(cache.load(tmp.join("c.png")).is_err());
    assert_eq!(cache.len(), 2);
    assert!(cache.contains(tmp.join("a.png")));
    assert!(cache.contains(tmp.join("b.png")));
    assert!(!cache.contains(tmp.join("c.png")));

    std::fs::remove_dir_all(&tmp).ok();
}
