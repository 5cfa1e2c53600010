use rayon;
use std::cmp::max;

use kernel::Kernel;
use {ImageInfo, Intensity, PixelBuffer, Region};

/// Regions at most this wide are filtered directly instead of quartered.
pub fn grain(info: ImageInfo) -> usize {
    max(info.width / 10, 1)
}

fn is_leaf(region: &Region, grain: usize) -> bool {
    region.width <= grain
}

/// Mutable window over the output rows covered by one region.
///
/// Each row slice is exactly `region.width` long and starts at column
/// `region.x`. Quartering splits the slices themselves, so sibling
/// regions can never reach the same output pixel.
struct RegionMut<'a> {
    region: Region,
    rows: Vec<&'a mut [Intensity]>,
}

impl<'a> RegionMut<'a> {
    fn full(output: &'a mut PixelBuffer) -> Self {
        let info = output.info();
        let rows = output.pixels_mut().chunks_mut(info.width).collect();
        RegionMut {
            region: Region::full(info),
            rows,
        }
    }

    fn quarter(self) -> (RegionMut<'a>, RegionMut<'a>, RegionMut<'a>, RegionMut<'a>) {
        let (tl, tr, bl, br) = self.region.quarter();
        let mut top = self.rows;
        let bottom = top.split_off(tl.height);
        let (tl_rows, tr_rows) = split_columns(top, tl.width);
        let (bl_rows, br_rows) = split_columns(bottom, bl.width);
        (
            RegionMut {
                region: tl,
                rows: tl_rows,
            },
            RegionMut {
                region: tr,
                rows: tr_rows,
            },
            RegionMut {
                region: bl,
                rows: bl_rows,
            },
            RegionMut {
                region: br,
                rows: br_rows,
            },
        )
    }
}

fn split_columns<'a>(
    rows: Vec<&'a mut [Intensity]>,
    at: usize,
) -> (Vec<&'a mut [Intensity]>, Vec<&'a mut [Intensity]>) {
    rows.into_iter().map(|row| row.split_at_mut(at)).unzip()
}

/// Recursive fork-join counterpart of `sequential::apply`.
///
/// The image is quartered until regions are no wider than `grain(info)`;
/// the four quadrants of every split run through `rayon::join` and the
/// parent returns only once all of them are done. Output matches
/// `sequential::apply` pixel for pixel.
pub fn apply<K: Kernel>(kernel: &K, input: &PixelBuffer, output: &mut PixelBuffer) {
    let info = input.info();
    assert_eq!(info, output.info(), "input and output dimensions differ");
    if info.is_empty() {
        return;
    }

    let grain = grain(info);
    debug!(
        "decomposing {}x{} image, grain {} px, margin {} px",
        info.width,
        info.height,
        grain,
        kernel.margin()
    );
    decompose(kernel, input, RegionMut::full(output), grain);
}

fn decompose<K: Kernel>(kernel: &K, input: &PixelBuffer, view: RegionMut, grain: usize) {
    debug_assert!(view.region.lies_within(input.info()));
    debug_assert_eq!(view.rows.len(), view.region.height);

    if view.region.is_empty() {
        return;
    }
    if is_leaf(&view.region, grain) {
        filter_leaf(kernel, input, view);
        return;
    }

    let (tl, tr, bl, br) = view.quarter();
    rayon::join(
        || {
            rayon::join(
                || decompose(kernel, input, tl, grain),
                || decompose(kernel, input, tr, grain),
            )
        },
        || {
            rayon::join(
                || decompose(kernel, input, bl, grain),
                || decompose(kernel, input, br, grain),
            )
        },
    );
}

/// Base case: the region clipped to the image interior, scanned like the
/// sequential executor. Regions away from the image border are scanned
/// edge to edge, reading their neighbors' input freely.
fn filter_leaf<K: Kernel>(kernel: &K, input: &PixelBuffer, mut view: RegionMut) {
    let region = view.region;
    let visit = region.intersect(&input.info().interior(kernel.margin()));
    if visit.is_empty() {
        return;
    }

    for y in visit.rows() {
        let row = &mut view.rows[y - region.y];
        for x in visit.columns() {
            row[x - region.x] = kernel.evaluate(input, x, y);
        }
    }
}

/// The base-case regions `apply` visits, in depth-first order.
pub fn leaves(info: ImageInfo) -> Vec<Region> {
    let grain = grain(info);
    let mut pending = vec![Region::full(info)];
    let mut leaves = Vec::new();
    while let Some(region) = pending.pop() {
        if region.is_empty() {
            continue;
        }
        if is_leaf(&region, grain) {
            leaves.push(region);
        } else {
            let (tl, tr, bl, br) = region.quarter();
            pending.push(br);
            pending.push(bl);
            pending.push(tr);
            pending.push(tl);
        }
    }
    leaves
}
