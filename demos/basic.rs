// Example: build, query, update.
use segment_tree::SegmentTree;

fn main() {
    let mut tree = SegmentTree::build(&[5, 2, 8, 1, 9, 3]);
    println!("len={} capacity={}", tree.len(), tree.capacity());
    println!("sum[0, 6)={:?}", tree.range_sum(0, tree.len()));

    tree.point_update(2, 0).expect("index 2 is in range");
    println!("after update: sum[0, 6)={:?}", tree.range_sum(0, tree.len()));
    println!("after update: sum[2, 4)={:?}", tree.range_sum(2, 4));

    // Rejected arguments leave the tree untouched.
    if let Err(err) = tree.point_update(6, 1) {
        println!("rejected: {err}");
    }
    if let Err(err) = tree.range_sum(2, 1) {
        println!("rejected: {err}");
    }
}
