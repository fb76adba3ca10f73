//! Document model for parsed stylesheets
//!
//! A stylesheet is a tree: a [`Document`] holds top-level rule [`Block`]s,
//! and each block holds an ordered sequence of child [`Node`]s, where a child
//! is either a [`Declaration`] or a nested block (keyframe steps and similar
//! rule groups). Insertion preserves order and drops structural duplicates.

/// A single `property: value` pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: String,
    pub value: String,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }

    /// Trim surrounding whitespace and trailing statement terminators
    pub fn normalize(&mut self) {
        self.property = self.property.trim().to_string();
        self.value = self
            .value
            .trim()
            .trim_end_matches(';')
            .trim()
            .to_string();
    }
}

/// A block child: either a declaration or a nested block
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Declaration(Declaration),
    Block(Block),
}

impl Node {
    fn normalize(&mut self) {
        match self {
            Node::Declaration(decl) => decl.normalize(),
            Node::Block(block) => block.normalize(),
        }
    }
}

/// A selector plus its ordered body of declarations and nested blocks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub selector: String,
    children: Vec<Node>,
}

impl Block {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            children: Vec::new(),
        }
    }

    /// Append a child, dropping it if a structurally identical one exists
    pub fn push(&mut self, node: Node) {
        if !self.children.contains(&node) {
            self.children.push(node);
        }
    }

    pub fn push_declaration(&mut self, decl: Declaration) {
        self.push(Node::Declaration(decl));
    }

    pub fn push_block(&mut self, block: Block) {
        self.push(Node::Block(block));
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Iterate the block's direct declarations in order
    pub fn declarations(&self) -> impl Iterator<Item = &Declaration> {
        self.children.iter().filter_map(|node| match node {
            Node::Declaration(decl) => Some(decl),
            Node::Block(_) => None,
        })
    }

    /// Iterate the block's direct nested blocks in order
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.children.iter().filter_map(|node| match node {
            Node::Block(block) => Some(block),
            Node::Declaration(_) => None,
        })
    }

    /// Trim the selector and normalize all children in place
    pub fn normalize(&mut self) {
        self.selector = self.selector.trim().to_string();
        for child in &mut self.children {
            child.normalize();
        }
    }
}

/// A whole stylesheet: top-level blocks with no enclosing selector
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    blocks: Vec<Block>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a top-level block, dropping structural duplicates
    pub fn push_block(&mut self, block: Block) {
        if !self.blocks.contains(&block) {
            self.blocks.push(block);
        }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn normalize(&mut self) {
        for block in &mut self.blocks {
            block.normalize();
        }
    }
}
