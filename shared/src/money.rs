//! 金额展示模块
//!
//! 金额在整个系统中是服务端计算的 `f64`；客户端只负责展示，
//! 不做任何本地重算或校验。

/// 以美元格式渲染金额（两位小数）
pub fn format_usd(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// 行小计：加入时单价 × 数量
///
/// 仅用于单行展示；购物车/订单总额始终使用服务端返回的 `totalAmount`。
pub fn line_total(price: f64, quantity: u32) -> f64 {
    price * quantity as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_two_decimal_places() {
        assert_eq!(format_usd(20.0), "$20.00");
        assert_eq!(format_usd(9.5), "$9.50");
        assert_eq!(format_usd(0.0), "$0.00");
        assert_eq!(format_usd(1234.567), "$1234.57");
    }

    #[test]
    fn line_total_for_price_ten_quantity_two_is_twenty() {
        let total = line_total(10.0, 2);
        assert_eq!(total, 20.0);
        assert_eq!(format_usd(total), "$20.00");
    }
}
