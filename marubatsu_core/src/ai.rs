/// 空きマスからランダムに1手選ぶAI。
pub mod random;
pub mod types;
