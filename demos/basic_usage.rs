//! Build each core structure and print illustrative output.

use algokit::*;

fn main() -> AlgoResult<()> {
    // Linked list: mixed head/tail/positional insertion
    let mut list = SinglyLinkedList::new();
    list.append(6);
    list.push(7);
    list.push(1);
    list.append(4);
    let second = list.next(list.head().unwrap()).unwrap();
    list.insert_after(second, 8)?;

    print!("Linked list: ");
    for value in list.iter() {
        print!("{} -> ", value);
    }
    println!("None");

    // Binary search tree: sorted traversal and lookup
    let tree: BinarySearchTree<i64> = [50, 30, 20, 40, 70, 60, 80].into_iter().collect();
    let inorder: Vec<i64> = tree.inorder().copied().collect();
    println!("BST inorder: {:?}", inorder);
    println!(
        "BST search 60: {}",
        if tree.contains(&60) { "Found" } else { "Not Found" }
    );

    // Sorting
    let mut values = vec![64, 34, 25, 12, 22, 11, 90];
    quick_sort(&mut values);
    println!("Quick sorted: {:?}", values);

    // Searching the sorted result
    match binary_search(&values, &22) {
        Some(index) => println!("22 found at index {}", index),
        None => println!("22 not found"),
    }

    Ok(())
}
