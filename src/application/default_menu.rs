//! Built-in menu of the administration application.

use crate::domain::{DomainResult, MenuNode, MenuTree};

/// The static menu used when no menu file is configured.
pub fn standard_menu() -> DomainResult<MenuTree> {
    MenuTree::new(vec![
        MenuNode::leaf("Dashboard", "/dashboard"),
        MenuNode::group(
            "Manajemen",
            vec![
                MenuNode::leaf("Program Kerja", "/management/program-kerja"),
                MenuNode::leaf("Anggaran", "/management/budget"),
                MenuNode::leaf("Risiko", "/management/risk"),
                MenuNode::leaf("Isu", "/management/issue"),
            ],
        ),
        MenuNode::group(
            "Marketing",
            vec![
                MenuNode::leaf("Transaksi", "/marketing/transaction"),
                MenuNode::leaf("Produk", "/marketing/product"),
                MenuNode::leaf("Programmer", "/marketing/programmer"),
            ],
        ),
        MenuNode::leaf("Pengguna", "/users"),
    ])
}
